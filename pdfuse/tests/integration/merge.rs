//! Integration tests for end-to-end merging.

use pdfuse::collect::{collect_pdfs, ensure_mergeable};
use pdfuse::error::PdfuseError;
use pdfuse::merge::Merger;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

use crate::common::{outline_titles, page_widths, write_outlined, write_pdf, write_single_page};

#[test]
fn test_merge_same_file_twice() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_single_page(&temp_dir.path().join("one.pdf"), 595);
    let output = temp_dir.path().join("twice.pdf");

    let stats = Merger::new()
        .merge(&[input.clone(), input.clone()], &output)
        .unwrap();

    assert_eq!(stats.files_merged, 2);
    assert_eq!(stats.total_pages, 2);
    assert_eq!(page_widths(&output), vec![595.0, 595.0]);

    let input_size = fs::metadata(&input).unwrap().len();
    let output_size = fs::metadata(&output).unwrap().len();
    assert!(output_size > input_size);
    assert_eq!(stats.output_size, output_size);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(7)]
fn test_merge_keeps_input_order(#[case] count: i64) {
    let temp_dir = TempDir::new().unwrap();
    // Names sort opposite to widths so a sorted merge would show up.
    let inputs: Vec<_> = (0..count)
        .map(|i| {
            let name = format!("input-{}.pdf", count - i);
            write_single_page(&temp_dir.path().join(name), 100 + i * 10)
        })
        .collect();
    let output = temp_dir.path().join("merged.pdf");

    let stats = Merger::new().merge(&inputs, &output).unwrap();

    let expected: Vec<f32> = (0..count).map(|i| (100 + i * 10) as f32).collect();
    assert_eq!(stats.total_pages, count as usize);
    assert_eq!(page_widths(&output), expected);
}

#[test]
fn test_merge_multi_page_documents() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let cover = write_single_page(&root.join("cover.pdf"), 10);
    write_pdf(&root.join("chapters/01.pdf"), &[20, 30]);
    write_pdf(&root.join("chapters/02.pdf"), &[40, 50, 60]);
    let output = root.join("book.pdf");

    let files = collect_pdfs(&[cover, root.join("chapters")]).unwrap();
    ensure_mergeable(&files).unwrap();

    Merger::new().merge(&files, &output).unwrap();

    assert_eq!(
        page_widths(&output),
        vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]
    );
}

#[test]
fn test_merge_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_single_page(&temp_dir.path().join("a.pdf"), 100);
    let b = write_single_page(&temp_dir.path().join("b.pdf"), 200);
    let output = temp_dir.path().join("out.pdf");
    fs::write(&output, b"old contents").unwrap();

    Merger::new().merge(&[a, b], &output).unwrap();

    assert_eq!(page_widths(&output), vec![100.0, 200.0]);
}

#[test]
fn test_merge_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_single_page(&temp_dir.path().join("a.pdf"), 100);
    let b = write_single_page(&temp_dir.path().join("b.pdf"), 200);
    let output = temp_dir.path().join("missing/out.pdf");

    let err = Merger::new().merge(&[a, b], &output).unwrap_err();

    assert!(matches!(err, PdfuseError::FailedToCreateOutput { .. }));
    assert_eq!(err.exit_code(), 5);
    assert!(!temp_dir.path().join("missing").exists());
}

#[test]
fn test_merge_output_is_an_input() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_single_page(&temp_dir.path().join("a.pdf"), 100);
    let b = write_single_page(&temp_dir.path().join("b.pdf"), 200);

    Merger::new().merge(&[a.clone(), b], &a).unwrap();

    assert_eq!(page_widths(&a), vec![100.0, 200.0]);
}

#[test]
fn test_merge_keeps_bookmarks() {
    let temp_dir = TempDir::new().unwrap();
    let intro = write_outlined(&temp_dir.path().join("intro.pdf"), 100, "Chapter 1");
    let plain = write_single_page(&temp_dir.path().join("plain.pdf"), 200);
    let outro = write_outlined(&temp_dir.path().join("outro.pdf"), 300, "Epilogue");
    let output = temp_dir.path().join("book.pdf");

    Merger::new()
        .merge(&[intro.clone(), plain, outro, intro], &output)
        .unwrap();

    assert_eq!(
        outline_titles(&output),
        vec!["Chapter 1", "Epilogue", "Chapter 1"]
    );
    assert_eq!(page_widths(&output), vec![100.0, 200.0, 300.0, 100.0]);
}

#[test]
fn test_merge_without_bookmarks_adds_none() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_single_page(&temp_dir.path().join("a.pdf"), 100);
    let b = write_single_page(&temp_dir.path().join("b.pdf"), 200);
    let output = temp_dir.path().join("out.pdf");

    Merger::new().merge(&[a, b], &output).unwrap();

    assert!(outline_titles(&output).is_empty());
}
