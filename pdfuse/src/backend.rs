//! The PDF library boundary.
//!
//! Collection, validation and merging never touch a PDF library directly.
//! They go through [`PdfBackend`], which exposes exactly three operations:
//! probe a file, append its pages to the document being built, and write
//! that document out. [`LopdfBackend`] is the implementation used by the
//! CLI; tests substitute their own.

use std::mem;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::io::{PdfReader, PdfWriter, WriteStatistics};
use crate::merge::assembly::PageAssembly;

/// Verdict of a structural probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readability {
    /// The document parsed and its page tree is reachable.
    Readable {
        /// Number of pages found.
        pages: usize,
    },
    /// The document failed to parse.
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },
}

impl Readability {
    /// Returns true for [`Readability::Readable`].
    pub fn is_readable(&self) -> bool {
        matches!(self, Self::Readable { .. })
    }
}

/// Capability interface over a PDF library.
pub trait PdfBackend {
    /// Open the PDF at `path` in isolation and check its structure.
    ///
    /// A malformed document is `Ok(Readability::Malformed { .. })`; `Err` is
    /// reserved for failures unrelated to the contents, such as I/O.
    fn probe(&self, path: &Path) -> Result<Readability>;

    /// Append every page of the PDF at `path` to the in-progress document.
    ///
    /// Returns the number of pages appended.
    fn append(&mut self, path: &Path) -> Result<usize>;

    /// Write the in-progress document to `output` and reset to empty.
    ///
    /// The file is complete and closed when this returns `Ok`.
    fn finalize(&mut self, output: &Path) -> Result<WriteStatistics>;
}

/// [`PdfBackend`] built on `lopdf`.
#[derive(Debug, Default)]
pub struct LopdfBackend {
    reader: PdfReader,
    writer: PdfWriter,
    assembly: PageAssembly,
}

impl LopdfBackend {
    /// Create a backend with default reader and writer settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PdfBackend for LopdfBackend {
    fn probe(&self, path: &Path) -> Result<Readability> {
        self.reader.probe(path)
    }

    fn append(&mut self, path: &Path) -> Result<usize> {
        let loaded = self.reader.load(path)?;
        debug!(
            "appending {} ({} page(s), loaded in {:?})",
            loaded.path.display(),
            loaded.page_count,
            loaded.load_time
        );
        self.assembly.append(loaded.document)
    }

    fn finalize(&mut self, output: &Path) -> Result<WriteStatistics> {
        let assembly = mem::take(&mut self.assembly);
        let mut document = assembly.into_document()?;
        self.writer.save_with_stats(&mut document, output)
    }
}
