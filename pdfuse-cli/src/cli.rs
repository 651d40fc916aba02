//! CLI argument parsing for pdfuse.
//!
//! This module defines the command-line interface using `clap`. It is also
//! compiled into the build script, which renders the man page from it.

use clap::Parser;
use std::path::PathBuf;

use pdfuse::config::Config;
use pdfuse::error::PdfuseError;

/// Fuse PDF files and directories of PDFs into a single document.
///
/// Each INPUT is either a PDF file or a directory. Directories are searched
/// recursively and their PDFs are taken in path order. Inputs keep the order
/// given on the command line. Every PDF is checked before anything is
/// written; OUTPUT is replaced if it exists.
#[derive(Parser, Debug)]
#[command(name = "pdfuse")]
#[command(version)]
#[command(about = "Fuse PDF files and directories of PDFs into a single document")]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output PDF file path
    ///
    /// The fused PDF is written here. Its directory must already exist.
    #[arg(required = true, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input PDF files and directories (in order)
    ///
    /// Examples:
    ///   pdfuse book.pdf cover.pdf chapters/ appendix.pdf
    ///   pdfuse all.pdf scans/
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Dry run - validate inputs and show the fuse plan without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show per-file details and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings are printed. A dry run still prints its plan.
    #[arg(short, long, conflicts_with = "verbose", env = "PDFUSE_QUIET")]
    pub quiet: bool,

    /// Print a JSON run report to stdout instead of the human summary
    #[arg(long)]
    pub json: bool,
}

impl TryFrom<&Cli> for Config {
    type Error = PdfuseError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let config = Config {
            inputs: cli.inputs.clone(),
            output: cli.output.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            quiet: cli.quiet,
            json: cli.json,
        };

        config.validate()?;

        Ok(config)
    }
}
