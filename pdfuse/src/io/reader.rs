//! PDF reading and probing.
//!
//! [`PdfReader`] is the only place that asks `lopdf` to parse a file. It
//! offers two entry points:
//!
//! - [`PdfReader::probe`] answers "can this file be opened?" and reports a
//!   structural failure as data rather than as an error;
//! - [`PdfReader::load`] returns the parsed document for merging and turns
//!   a structural failure into [`PdfuseError::FailedToLoadPdf`].
//!
//! In both cases an I/O failure (missing file, permission denied) is an
//! error, never a verdict on the file's contents.
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> pdfuse::Result<()> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::backend::Readability;
use crate::error::{PdfuseError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, page_count: usize, load_time: Duration) -> Self {
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// Outcome of a raw parse attempt, before it is mapped onto the caller's view.
enum Parsed {
    Ok { document: Document, page_count: usize },
    Malformed(String),
}

/// PDF reader backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Check whether a PDF can be opened and its page tree reached.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures unrelated to the file's contents:
    /// - [`PdfuseError::FileNotFound`] if the path does not exist
    /// - [`PdfuseError::Io`] if the file cannot be read
    pub fn probe(&self, path: &Path) -> Result<Readability> {
        match self.parse(path)? {
            Parsed::Ok { page_count, .. } => {
                debug!("{}: readable, {} page(s)", path.display(), page_count);
                Ok(Readability::Readable { pages: page_count })
            }
            Parsed::Malformed(reason) => {
                warn!("{}: malformed: {}", path.display(), reason);
                Ok(Readability::Malformed { reason })
            }
        }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File does not exist or cannot be read
    /// - File is not a structurally valid PDF
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();

        match self.parse(path)? {
            Parsed::Ok {
                document,
                page_count,
            } => Ok(LoadedPdf::new(
                document,
                path.to_path_buf(),
                page_count,
                start.elapsed(),
            )),
            Parsed::Malformed(reason) => {
                Err(PdfuseError::failed_to_load_pdf(path.to_path_buf(), reason))
            }
        }
    }

    fn parse(&self, path: &Path) -> Result<Parsed> {
        if !path.try_exists()? {
            return Err(PdfuseError::file_not_found(path.to_path_buf()));
        }

        let document = match Document::load(path) {
            Ok(document) => document,
            Err(lopdf::Error::IO(source)) => return Err(PdfuseError::Io { source }),
            Err(err) => return Ok(Parsed::Malformed(err.to_string())),
        };

        match check_page_tree(&document) {
            Ok(page_count) => Ok(Parsed::Ok {
                document,
                page_count,
            }),
            Err(reason) => Ok(Parsed::Malformed(reason)),
        }
    }
}

/// Confirm the catalog points at a page tree root and count its pages.
fn check_page_tree(doc: &Document) -> std::result::Result<usize, String> {
    let catalog = doc
        .catalog()
        .map_err(|e| format!("missing document catalog: {e}"))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| format!("catalog has no page tree reference: {e}"))?;

    doc.get_dictionary(pages_id)
        .map_err(|e| format!("page tree root is unreadable: {e}"))?;

    Ok(doc.get_pages().len())
}
