//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to a uniquely named temp file beside the output,
//!   then rename it over the output)
//! - Stream compression
//! - Write statistics
//!
//! The output's parent directory must already exist; it is never created.
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> pdfuse::Result<()> {
//! let writer = PdfWriter::new();
//! writer.save(&mut doc, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::error::{PdfuseError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF streams before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Number of pages in the written document.
    pub page_count: usize,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self::with_options(WriteOptions {
            atomic: false,
            ..Default::default()
        })
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Write operation fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// An existing file at `path` is replaced. Every handle is closed before
    /// this returns, whether or not the write succeeded.
    pub fn save_with_stats(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        if self.options.compress {
            doc.compress();
        }

        if self.options.atomic {
            let temp = temp_file_beside(path)?;
            debug!("writing {} via {}", path.display(), temp.path().display());

            // Dropping `temp` on any error removes the partial file.
            self.write_to(doc, temp.as_file(), path)?;
            temp.persist(path).map_err(|e| PdfuseError::FailedToWrite {
                path: path.to_path_buf(),
                source: e.error,
            })?;
        } else {
            debug!("writing {}", path.display());
            let file = File::create(path).map_err(|e| PdfuseError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;
            self.write_to(doc, &file, path)?;
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
            page_count: doc.get_pages().len(),
            compressed: self.options.compress,
        })
    }

    /// Serialize `doc` into `file` and sync it.
    ///
    /// Errors report `output`, the path the caller asked for, even when
    /// `file` is a temp file.
    fn write_to(&self, doc: &mut Document, file: &File, output: &Path) -> Result<()> {
        let failed_write = |source: io::Error| PdfuseError::FailedToWrite {
            path: output.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| failed_write(io::Error::other(e)))?;

        writer.flush().map_err(failed_write)?;

        let file = writer
            .into_inner()
            .map_err(|e| failed_write(e.into_error()))?;
        file.sync_all().map_err(failed_write)?;

        Ok(())
    }
}

/// Create a uniquely named temp file in the directory that will hold `path`.
///
/// The name never collides with an existing file, so nothing the user keeps
/// next to the output is touched.
fn temp_file_beside(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".pdfuse-").suffix(".tmp");

    // Temp files default to owner-only; the output should get the usual
    // umask-derived mode instead.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder
        .tempfile_in(dir)
        .map_err(|e| PdfuseError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })
}
