//! Candidate discovery.
//!
//! Turns the raw input arguments into the ordered list of PDF paths that
//! will be validated and merged:
//!
//! - a regular file with a `.pdf` suffix (any case) is taken as given;
//! - a directory contributes every PDF below it, at any depth, sorted by
//!   the full path string;
//! - anything else is skipped without comment.
//!
//! Arguments keep their relative order, and nothing is deduplicated.
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::collect::{collect_pdfs, ensure_mergeable};
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfuse::Result<()> {
//! let files = collect_pdfs(&[PathBuf::from("cover.pdf"), PathBuf::from("chapters")])?;
//! ensure_mergeable(&files)?;
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{PdfuseError, Result};

/// Fewest documents that make a merge meaningful.
pub const MIN_MERGE_INPUTS: usize = 2;

/// Check whether a path carries a `.pdf` suffix, ignoring case.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OsStr::new("pdf")))
}

/// Collect PDF files from files and directories, keeping argument order.
///
/// # Errors
///
/// Returns [`PdfuseError::Traversal`] if a directory below an input
/// argument cannot be read.
pub fn collect_pdfs<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut pdf_files = Vec::new();

    for input in inputs {
        let input = input.as_ref();

        if input.is_dir() {
            let found = collect_from_dir(input)?;
            debug!("{}: {} PDF(s) below directory", input.display(), found.len());
            pdf_files.extend(found);
        } else if input.is_file() && is_pdf_path(input) {
            debug!("{}: PDF file", input.display());
            pdf_files.push(input.to_path_buf());
        } else {
            trace!("{}: skipped", input.display());
        }
    }

    Ok(pdf_files)
}

/// Walk `dir` to unbounded depth and return its PDFs in path-string order.
fn collect_from_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_pdf_path(path) {
            found.push(entry.into_path());
        }
    }

    // `Path`'s own ordering compares component by component; the merge order
    // is defined on the whole path string instead.
    found.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(found)
}

/// Ensure the collected list holds enough documents to merge.
///
/// # Errors
///
/// - [`PdfuseError::NoPdfsFound`] for an empty list
/// - [`PdfuseError::NotEnoughPdfs`] for a single file
pub fn ensure_mergeable(files: &[PathBuf]) -> Result<()> {
    match files.len() {
        0 => Err(PdfuseError::NoPdfsFound),
        found if found < MIN_MERGE_INPUTS => Err(PdfuseError::NotEnoughPdfs { found }),
        _ => Ok(()),
    }
}
