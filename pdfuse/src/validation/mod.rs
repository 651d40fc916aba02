//! Pre-flight validation of PDF candidates.
//!
//! Every candidate is probed through the [`PdfBackend`] before anything is
//! merged. Structural failures are collected rather than returned one at a
//! time, so a single run reports every broken input at once.
//!
//! A pass is advisory: it shows each file can be opened on its own, not that
//! the merge will succeed.
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::backend::LopdfBackend;
//! use pdfuse::validation::Validator;
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfuse::Result<()> {
//! let backend = LopdfBackend::new();
//! let validator = Validator::new(&backend);
//! let summary = validator.validate_all(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])?;
//! println!("{} files, {} pages", summary.files_validated, summary.total_pages);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::backend::{PdfBackend, Readability};
use crate::error::{PdfuseError, Result};
use crate::utils::format_file_size;

/// Result of validating a single PDF file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// Size of the file in bytes.
    pub file_size: u64,
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file, in input order.
    pub results: Vec<ValidationResult>,

    /// Total number of pages across all files.
    pub total_pages: usize,

    /// Total file size in bytes.
    pub total_size: u64,

    /// Number of files that passed validation.
    pub files_validated: usize,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_size = results.iter().map(|r| r.file_size).sum();
        let files_validated = results.len();

        Self {
            results,
            total_pages,
            total_size,
            files_validated,
        }
    }

    /// Format the total file size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Validator for PDF candidates.
#[derive(Debug)]
pub struct Validator<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: PdfBackend + ?Sized> Validator<'a, B> {
    /// Create a validator that probes through `backend`.
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Check a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read at all. A malformed file
    /// is `Ok(false)`.
    pub fn is_valid(&self, path: &Path) -> Result<bool> {
        Ok(self.backend.probe(path)?.is_readable())
    }

    /// Probe every candidate and aggregate the failures.
    ///
    /// Each file is probed independently; a malformed file does not stop the
    /// remaining files from being checked.
    ///
    /// # Errors
    ///
    /// Returns [`PdfuseError::InvalidPdfs`] listing every malformed path in
    /// input order. I/O failures propagate as soon as they happen.
    pub fn validate_all(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        let mut results = Vec::with_capacity(paths.len());
        let mut invalid = Vec::new();

        for path in paths {
            match self.backend.probe(path)? {
                Readability::Readable { pages } => {
                    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                    results.push(ValidationResult {
                        path: path.clone(),
                        page_count: pages,
                        file_size,
                    });
                }
                Readability::Malformed { reason } => {
                    debug!("rejecting {}: {}", path.display(), reason);
                    invalid.push(path.clone());
                }
            }
        }

        if !invalid.is_empty() {
            return Err(PdfuseError::invalid_pdfs(invalid));
        }

        let summary = ValidationSummary::from_results(results);
        info!(
            "validated {} files ({} pages, {})",
            summary.files_validated,
            summary.total_pages,
            summary.format_total_size()
        );

        Ok(summary)
    }
}
