//! Output formatting and display for pdfuse.
//!
//! This module handles all user-facing output:
//! - Status messages in quiet and verbose modes
//! - The dry-run merge plan
//! - Validation and merge summaries
//! - The machine-readable [`RunReport`]
//!
//! # Examples
//!
//! ```no_run
//! use pdfuse::output::OutputFormatter;
//! use pdfuse::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Starting fuse");
//! formatter.success("Fuse completed");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{PdfuseError, Result};
use crate::merge::MergeStatistics;
use crate::utils::pluralize;
use crate::validation::ValidationSummary;

/// Machine-readable summary of one run, printed by `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Requested output path.
    pub output: PathBuf,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Collected files, in merge order.
    pub files: Vec<PathBuf>,

    /// Validation results.
    pub validation: ValidationSummary,

    /// Merge results; absent on a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeStatistics>,
}

impl RunReport {
    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PdfuseError::other(format!("Failed to serialize report: {e}")))
    }
}

/// Display validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    formatter.info(&format!(
        "All {} {} passed validation: {} pages, {}",
        summary.files_validated,
        pluralize(summary.files_validated, "file", "files"),
        summary.total_pages,
        summary.format_total_size()
    ));
}

/// Display the dry-run plan: every file in merge order with its page count.
pub fn display_merge_plan(
    formatter: &OutputFormatter,
    summary: &ValidationSummary,
    output: &Path,
) {
    formatter.section("Dry run: the following files would be fused:");
    for (index, result) in summary.results.iter().enumerate() {
        formatter.list_item(
            index + 1,
            &format!(
                "{} ({} {})",
                result.path.display(),
                result.page_count,
                pluralize(result.page_count, "page", "pages")
            ),
        );
    }
    formatter.blank_line();
    formatter.info(&format!(
        "Output would be {} with {} pages",
        output.display(),
        summary.total_pages
    ));
}

/// Display merge statistics to the user.
pub fn display_merge_statistics(formatter: &OutputFormatter, stats: &MergeStatistics) {
    formatter.success(&format!(
        "Fused {} files into {} ({} pages, {})",
        stats.files_merged,
        stats.output_path.display(),
        stats.total_pages,
        stats.format_output_size()
    ));
    formatter.detail("Time", &format!("{:.2}s", stats.merge_time.as_secs_f64()));
    formatter.detail("Write", &format!("{:.2}s", stats.write_time.as_secs_f64()));
    formatter.detail("Compressed", if stats.compressed { "yes" } else { "no" });
}
