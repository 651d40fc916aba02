//! Configuration module for pdfuse.
//!
//! This module holds the validated settings that drive one fuse run. The
//! CLI builds a [`Config`] from its arguments and calls [`Config::validate`]
//! before any file is touched.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Complete configuration for a fuse operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw input paths (files and/or directories), in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Dry run mode - collect and validate without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Emit a JSON run report instead of the human summary.
    pub json: bool,
}

impl Config {
    /// Create a configuration with default flags.
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output: output.into(),
            dry_run: false,
            verbose: false,
            quiet: false,
            json: false,
        }
    }

    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input paths are specified
    /// - The output path is empty
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input paths specified");
        }

        if self.output.as_os_str().is_empty() {
            bail!("Output path must not be empty");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        Ok(())
    }

    /// Check if human-readable output should be displayed.
    ///
    /// Returns false in quiet mode (unless doing a dry run) and in JSON mode.
    pub fn should_print(&self) -> bool {
        !self.json && (!self.quiet || self.dry_run)
    }
}
