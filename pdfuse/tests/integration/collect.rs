//! Integration tests for candidate collection.

use pdfuse::collect::{collect_pdfs, ensure_mergeable};
use pdfuse::error::PdfuseError;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{write_bytes, write_single_page};

#[test]
fn test_collect_recurses_to_any_depth() {
    let temp_dir = TempDir::new().unwrap();
    let parent = temp_dir.path().join("parent");

    let first = write_single_page(&parent.join("first.pdf"), 100);
    let second = write_single_page(&parent.join("child/second.pdf"), 200);
    let third = write_single_page(&parent.join("child/grandchild/third.pdf"), 300);

    let files = collect_pdfs(&[parent]).unwrap();

    // "child/grandchild/..." < "child/second.pdf" < "first.pdf" by full path string.
    assert_eq!(files, vec![third, second, first]);
}

#[test]
fn test_collect_mixed_arguments_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let file_b = write_single_page(&root.join("fileB.pdf"), 100);
    let a1 = write_single_page(&root.join("dirX/a1.pdf"), 200);
    let a2 = write_single_page(&root.join("dirX/a2.pdf"), 300);
    let file_c = write_single_page(&root.join("fileC.pdf"), 400);

    let files = collect_pdfs(&[file_b.clone(), root.join("dirX"), file_c.clone()]).unwrap();

    assert_eq!(files, vec![file_b, a1, a2, file_c]);
}

#[test]
fn test_collect_skips_non_pdfs_and_missing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let pdf = write_single_page(&root.join("docs/keep.pdf"), 100);
    let upper = write_single_page(&root.join("docs/LOUD.PDF"), 100);
    write_bytes(&root.join("docs/notes.txt"), b"not a pdf");
    write_bytes(&root.join("docs/pdf"), b"no extension");
    let stray = write_bytes(&root.join("readme.md"), b"# readme");

    let files = collect_pdfs(&[
        root.join("docs"),
        stray,
        PathBuf::from("/definitely/not/here.pdf"),
    ])
    .unwrap();

    assert_eq!(files, vec![upper, pdf]);
}

#[test]
fn test_collect_then_ensure_mergeable() {
    let temp_dir = TempDir::new().unwrap();
    let only = write_single_page(&temp_dir.path().join("only.pdf"), 100);

    let none = collect_pdfs(&[temp_dir.path().join("empty")]).unwrap();
    assert!(matches!(
        ensure_mergeable(&none),
        Err(PdfuseError::NoPdfsFound)
    ));

    let one = collect_pdfs(&[only.clone()]).unwrap();
    let err = ensure_mergeable(&one).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(
        err.to_string(),
        "Inputs do not yield more than one PDF -- nothing to fuse."
    );

    let twice = collect_pdfs(&[only.clone(), only]).unwrap();
    assert!(ensure_mergeable(&twice).is_ok());
}
