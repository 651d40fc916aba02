//! Core merge driver.
//!
//! The merger owns no PDF logic of its own. It feeds the ordered candidate
//! list into a [`PdfBackend`] one file at a time and asks the backend to
//! write the result.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use crate::backend::{LopdfBackend, PdfBackend};
use crate::error::{PdfuseError, Result};
use crate::utils::{format_file_size, pluralize};

/// Statistics about a merge operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStatistics {
    /// Number of input files appended.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total time taken, appends and write included.
    pub merge_time: Duration,

    /// Time taken to write the output.
    pub write_time: Duration,

    /// Path of the written file.
    pub output_path: PathBuf,

    /// Size of the written file in bytes.
    pub output_size: u64,

    /// Whether streams were compressed on write.
    pub compressed: bool,
}

impl MergeStatistics {
    /// Format output size as human-readable string.
    pub fn format_output_size(&self) -> String {
        format_file_size(self.output_size)
    }
}

/// PDF merger that concatenates documents through a backend.
#[derive(Debug)]
pub struct Merger<B = LopdfBackend> {
    backend: B,
}

impl Merger<LopdfBackend> {
    /// Create a merger over the `lopdf` backend.
    pub fn new() -> Self {
        Self::with_backend(LopdfBackend::new())
    }
}

impl Default for Merger<LopdfBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PdfBackend> Merger<B> {
    /// Create a merger over the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Concatenate `paths`, in order, into `output`.
    ///
    /// Every page of `paths[0]` precedes every page of `paths[1]`, and so on.
    /// A path listed twice is appended twice. An existing `output` is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `paths` is empty
    /// - An input cannot be loaded
    /// - The output cannot be created or written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfuse::merge::Merger;
    /// # use std::path::{Path, PathBuf};
    /// # fn example() -> pdfuse::Result<()> {
    /// let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let stats = Merger::new().merge(&inputs, Path::new("out.pdf"))?;
    /// println!("Merged {} files into {} pages", stats.files_merged, stats.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, paths: &[PathBuf], output: &Path) -> Result<MergeStatistics> {
        if paths.is_empty() {
            return Err(PdfuseError::NoPdfsFound);
        }

        let start = Instant::now();
        let mut appended_pages = 0;

        for (index, path) in paths.iter().enumerate() {
            let pages = self.backend.append(path)?;
            debug!(
                "[{}/{}] appended {} {} from {}",
                index + 1,
                paths.len(),
                pages,
                pluralize(pages, "page", "pages"),
                path.display()
            );
            appended_pages += pages;
        }

        let written = self.backend.finalize(output)?;

        info!(
            "merged {} {} ({} pages) into {}",
            paths.len(),
            pluralize(paths.len(), "file", "files"),
            appended_pages,
            output.display()
        );

        Ok(MergeStatistics {
            files_merged: paths.len(),
            total_pages: written.page_count,
            merge_time: start.elapsed(),
            write_time: written.write_time,
            output_path: written.output_path,
            output_size: written.file_size,
            compressed: written.compressed,
        })
    }
}
