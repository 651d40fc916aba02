//! I/O operations for pdfuse.
//!
//! This module handles all PDF file I/O:
//! - Probing and loading PDF documents from disk
//! - Writing the merged PDF to disk
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # fn example() -> pdfuse::Result<()> {
//! let reader = PdfReader::new();
//! let mut loaded = reader.load(Path::new("input.pdf"))?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&mut loaded.document, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
