//! plunge CLI
//!
//! Copies newer files from SOURCE into DEST for a list of relative
//! pathnames read from standard input.

mod cli;
mod commands;
mod error;
mod input;

use std::io;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use commands::Flags;
use error::Result;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "PLUNGE_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let flags = Flags {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
        purge: cli.purge,
    };
    let settings = commands::load_settings(cli.config.as_deref(), flags)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let report = commands::run_sync(&cli.source, &cli.dest, &settings, stdin.lock(), &mut stdout)?;

    if report.copy_failures > 0 {
        tracing::warn!(failed = report.copy_failures, "some files could not be copied");
    }
    Ok(())
}

/// Diagnostics go to stderr so the report on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{}: tracing already initialized", "warning".yellow().bold());
    }
}
