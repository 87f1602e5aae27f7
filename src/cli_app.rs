//! Top-level CLI definition and dispatch.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use colored::{Colorize, control};
use thiserror::Error;

use whitespace_sweeper::core::paths::resolve_absolute_path;
use whitespace_sweeper::sweep::walker::{DirectorySweeper, FileOutcome, SweepConfig, SweepStatus};

/// Whitespace Sweeper — strips trailing whitespace from text files in place.
#[derive(Debug, Parser)]
#[command(
    name = "wsw",
    author,
    version,
    about = "Whitespace Sweeper - trailing whitespace removal for source trees",
    long_about = None
)]
pub struct Cli {
    /// Directory to sweep. Defaults to the current working directory.
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

/// CLI error type. Success is exit code 0 even when individual files failed;
/// every error here maps to exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// The sweep was stopped by SIGINT/SIGTERM.
    #[error("processing interrupted by user")]
    Interrupted,
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) | Self::Runtime(_) | Self::Interrupted => 1,
        }
    }
}

/// Validate the root, run the sweep with live progress, print the summary.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    let root = cli.directory.clone().unwrap_or_else(|| PathBuf::from("."));
    if !root.exists() {
        return Err(CliError::User(format!(
            "directory '{}' does not exist",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(CliError::User(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let resolved = resolve_absolute_path(&root);
    println!("Starting to process directory: {}", resolved.display());
    println!("{}", "-".repeat(50));

    let sweeper = DirectorySweeper::new(SweepConfig::new(resolved))
        .with_interrupt_flag(interrupt_flag())
        .with_observer(print_outcome);

    let report = sweeper
        .sweep()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    if report.summary.interrupted {
        return Err(CliError::Interrupted);
    }

    println!("{}", "-".repeat(50));
    println!("Processing completed!");
    println!("Total files processed: {}", report.summary.files_processed);
    println!("Files modified: {}", report.summary.files_modified);
    Ok(())
}

/// One progress line per examined file; the marker distinguishes modified,
/// unchanged, and failed files.
fn print_outcome(outcome: &FileOutcome) {
    match &outcome.status {
        SweepStatus::Modified => {
            println!("{} {}", "✓ Processed:".green(), outcome.path.display());
        }
        SweepStatus::Unchanged => {
            println!("  No changes: {}", outcome.path.display());
        }
        SweepStatus::Failed(message) => {
            println!("{} {}: {message}", "✗ Error".red(), outcome.path.display());
        }
    }
}

/// SIGINT/SIGTERM set the returned flag; the sweep loop polls it between
/// files. Registration is best-effort.
#[cfg(unix)]
fn interrupt_flag() -> Arc<AtomicBool> {
    use signal_hook::consts::{SIGINT, SIGTERM};

    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        if let Err(e) = signal_hook::flag::register(signal, Arc::clone(&flag)) {
            eprintln!("wsw: failed to register signal {signal}: {e}");
        }
    }
    flag
}

#[cfg(not(unix))]
fn interrupt_flag() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}
