//! Integration tests for pre-flight validation and dry runs.

use pdfuse::backend::LopdfBackend;
use pdfuse::collect::collect_pdfs;
use pdfuse::error::PdfuseError;
use pdfuse::output::RunReport;
use pdfuse::validation::Validator;
use tempfile::TempDir;

use crate::common::{write_bytes, write_pdf, write_single_page};

#[test]
fn test_all_valid_passes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_pdf(&root.join("a.pdf"), &[100, 110]);
    write_single_page(&root.join("b.pdf"), 200);

    let files = collect_pdfs(&[root]).unwrap();
    let backend = LopdfBackend::new();
    let summary = Validator::new(&backend).validate_all(&files).unwrap();

    assert_eq!(summary.files_validated, 2);
    assert_eq!(summary.total_pages, 3);
    assert_eq!(summary.results[0].page_count, 2);
}

#[test]
fn test_every_invalid_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let good = write_single_page(&root.join("1-good.pdf"), 100);
    let junk = write_bytes(&root.join("2-junk.pdf"), b"random text\n%%EOF");
    let good2 = write_single_page(&root.join("3-good.pdf"), 100);
    let header = write_bytes(&root.join("4-header.pdf"), b"%PDF-1.4 dummy content");

    let files = collect_pdfs(&[root]).unwrap();
    assert_eq!(files, vec![good, junk.clone(), good2, header.clone()]);

    let backend = LopdfBackend::new();
    let err = Validator::new(&backend).validate_all(&files).unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert_eq!(
        err.to_string(),
        format!(
            "Found 2 invalid PDF files:\n • {}\n • {}",
            junk.display(),
            header.display()
        )
    );
}

#[test]
fn test_single_invalid_file_is_singular() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_single_page(&temp_dir.path().join("good.pdf"), 100);
    let bad = write_bytes(&temp_dir.path().join("bad.pdf"), b"just some junk");

    let backend = LopdfBackend::new();
    let err = Validator::new(&backend)
        .validate_all(&[good, bad])
        .unwrap_err();

    assert!(err.to_string().starts_with("Found 1 invalid PDF file:\n"));
}

#[test]
fn test_vanished_file_is_not_a_validation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_single_page(&temp_dir.path().join("good.pdf"), 100);
    let gone = temp_dir.path().join("gone.pdf");

    let backend = LopdfBackend::new();
    let err = Validator::new(&backend)
        .validate_all(&[good, gone])
        .unwrap_err();

    assert!(matches!(err, PdfuseError::FileNotFound { .. }));
}

#[test]
fn test_dry_run_report_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let a = write_single_page(&root.join("in/a.pdf"), 100);
    let b = write_single_page(&root.join("in/b.pdf"), 200);
    let output = root.join("out.pdf");

    let files = collect_pdfs(&[root.join("in")]).unwrap();
    let backend = LopdfBackend::new();
    let validation = Validator::new(&backend).validate_all(&files).unwrap();

    let report = RunReport {
        output: output.clone(),
        dry_run: true,
        files,
        validation,
        merge: None,
    };
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["files"][0], a.to_str().unwrap());
    assert_eq!(json["files"][1], b.to_str().unwrap());
    assert_eq!(json["validation"]["totalPages"], 2);
    assert!(!output.exists());
}
