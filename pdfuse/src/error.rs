//! Error types for pdfuse.
//!
//! Every fallible operation in the library returns [`PdfuseError`]. The
//! variants fall into three groups, which the CLI maps onto exit codes:
//!
//! - **Usage errors**: the inputs do not yield enough PDFs to merge.
//! - **Validation errors**: one or more candidates could not be parsed.
//! - **Fatal errors**: traversal, I/O, or library failures while merging.

use std::io;
use std::path::{Path, PathBuf};

use crate::utils::pluralize;

/// Result type alias for pdfuse operations.
pub type Result<T> = std::result::Result<T, PdfuseError>;

/// Main error type for pdfuse operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfuseError {
    /// A file expected on disk was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Walking an input directory failed.
    #[error("Cannot read directory entry below: {}\n  Reason: {source}", .path.display())]
    Traversal {
        /// Path where the walk failed.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A PDF could not be loaded while merging.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The inputs contained no PDF files at all.
    #[error("No PDF files found to fuse.")]
    NoPdfsFound,

    /// The inputs contained a single PDF, so there is nothing to merge.
    #[error("Inputs do not yield more than one PDF -- nothing to fuse.")]
    NotEnoughPdfs {
        /// Number of PDFs that were found.
        found: usize,
    },

    /// One or more candidates failed the structural check.
    #[error("{}", invalid_report(.paths))]
    InvalidPdfs {
        /// Invalid paths, in input order.
        paths: Vec<PathBuf>,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the output file failed part way.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Assembling the merged document failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

/// Render the aggregated validation report.
///
/// ```text
/// Found 2 invalid PDF files:
///  • a/broken.pdf
///  • b/empty.pdf
/// ```
fn invalid_report(paths: &[PathBuf]) -> String {
    let count = paths.len();
    let mut report = format!(
        "Found {count} invalid PDF {}:",
        pluralize(count, "file", "files")
    );
    for path in paths {
        report.push_str("\n • ");
        report.push_str(&path.display().to_string());
    }
    report
}

impl From<lopdf::Error> for PdfuseError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(source) => Self::Io { source },
            other => Self::other(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for PdfuseError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        Self::Traversal { path, source: err }
    }
}

impl From<anyhow::Error> for PdfuseError {
    fn from(err: anyhow::Error) -> Self {
        Self::invalid_config(format!("{err:#}"))
    }
}

impl PdfuseError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidPdfs error from the offending paths.
    pub fn invalid_pdfs(paths: Vec<PathBuf>) -> Self {
        Self::InvalidPdfs { paths }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is a usage problem rather than a failure.
    ///
    /// Usage errors are reported alongside the command usage.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::NoPdfsFound | Self::NotEnoughPdfs { .. })
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoPdfsFound => 2,
            Self::NotEnoughPdfs { .. } => 2,
            Self::FileNotFound { .. } => 2,
            Self::InvalidPdfs { .. } => 3,
            Self::FailedToLoadPdf { .. } => 3,
            Self::Traversal { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::MergeFailed { .. } => 6,
            Self::InvalidConfig { .. } => 1,
            Self::Other { .. } => 1,
        }
    }
}
