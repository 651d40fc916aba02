//! pdfuse - Fuse PDF files and directories of PDFs into a single document.
//!
//! Collects the inputs, checks every PDF, then writes one output file.

mod cli;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::Path;
use std::process;

use crate::cli::Cli;
use pdfuse::backend::LopdfBackend;
use pdfuse::collect::{collect_pdfs, ensure_mergeable};
use pdfuse::config::Config;
use pdfuse::error::PdfuseError;
use pdfuse::merge::Merger;
use pdfuse::output::{
    OutputFormatter, RunReport, display_merge_plan, display_merge_statistics,
    display_validation_summary,
};
use pdfuse::validation::Validator;

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    if let Err(err) = run(&cli) {
        if err.is_usage() {
            Cli::command().error(ErrorKind::InvalidValue, err).exit();
        }
        OutputFormatter::default().error(&format!("Error: {err}"));
        process::exit(err.exit_code());
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence.
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<(), PdfuseError> {
    let config = Config::try_from(cli)?;
    let formatter = OutputFormatter::from_config(&config);

    if formatter.is_verbose() {
        formatter.section(&format!("{} v{}", pdfuse::NAME, pdfuse::VERSION));
        formatter.blank_line();
    }

    formatter.debug("Collecting input files...");
    let files = collect_pdfs(config.inputs())?;
    ensure_mergeable(&files)?;
    for file in &files {
        formatter.detail("Input", &file.display().to_string());
    }

    if files.iter().any(|file| same_file(file, &config.output)) {
        formatter.warning(&format!(
            "Output file is also an input and will be replaced: {}",
            config.output.display()
        ));
    }

    let mut merger = Merger::with_backend(LopdfBackend::new());

    formatter.info(&format!("Validating {} PDF files...", files.len()));
    let validation = Validator::new(merger.backend()).validate_all(&files)?;
    display_validation_summary(&formatter, &validation);

    if config.dry_run {
        display_merge_plan(&formatter, &validation, &config.output);
        formatter.info("Run without --dry-run to create the fused PDF");
        let report = RunReport {
            output: config.output.clone(),
            dry_run: true,
            files,
            validation,
            merge: None,
        };
        return print_report(&config, &report);
    }

    formatter.info(&format!("Fusing into {}...", config.output.display()));
    let stats = merger.merge(&files, &config.output)?;
    display_merge_statistics(&formatter, &stats);

    let report = RunReport {
        output: config.output.clone(),
        dry_run: false,
        files,
        validation,
        merge: Some(stats),
    };
    print_report(&config, &report)
}

/// True if both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    a == b
        || matches!(
            (fs::canonicalize(a), fs::canonicalize(b)),
            (Ok(a), Ok(b)) if a == b
        )
}

/// Print the JSON report when `--json` was given.
fn print_report(config: &Config, report: &RunReport) -> Result<(), PdfuseError> {
    if config.json {
        println!("{}", report.to_json()?);
    }
    Ok(())
}
