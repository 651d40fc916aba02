//! pdfuse - Fuse PDF files and directories of PDFs into a single document.
//!
//! A run has three stages, each usable on its own:
//!
//! 1. [`collect`] expands files and directories into an ordered list of PDF
//!    paths.
//! 2. [`validation`] probes every candidate and reports all broken files at
//!    once.
//! 3. [`merge`] appends the candidates in order and writes one output file.
//!
//! The PDF library itself sits behind the [`backend::PdfBackend`] trait;
//! [`backend::LopdfBackend`] is the implementation built on `lopdf`.
//!
//! # Examples
//!
//! ## Basic Fuse
//!
//! ```no_run
//! use pdfuse::backend::LopdfBackend;
//! use pdfuse::collect::{collect_pdfs, ensure_mergeable};
//! use pdfuse::merge::Merger;
//! use pdfuse::validation::Validator;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdfuse::Result<()> {
//! let files = collect_pdfs(&[PathBuf::from("cover.pdf"), PathBuf::from("chapters")])?;
//! ensure_mergeable(&files)?;
//!
//! let mut merger = Merger::with_backend(LopdfBackend::new());
//! Validator::new(merger.backend()).validate_all(&files)?;
//!
//! let stats = merger.merge(&files, Path::new("book.pdf"))?;
//! println!("Created {} page document", stats.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfuse::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # fn example() -> pdfuse::Result<()> {
//! let reader = PdfReader::new();
//! let mut loaded = reader.load(Path::new("input.pdf"))?;
//! println!("PDF has {} pages", loaded.page_count);
//!
//! PdfWriter::new().save(&mut loaded.document, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod collect;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfuseError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
