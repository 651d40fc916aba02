//! PDF merging.
//!
//! - [`Merger`] drives a [`PdfBackend`](crate::backend::PdfBackend) over an
//!   ordered file list.
//! - [`PageAssembly`] is the in-progress document the `lopdf` backend
//!   appends into.
//! - [`pages`] flattens page trees without losing inherited attributes.

pub mod assembly;
pub mod merger;
pub mod pages;

pub use assembly::PageAssembly;
pub use merger::{MergeStatistics, Merger};
