//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// plunge - Copy newer files from SOURCE into DEST
///
/// Reads relative pathnames, one per line, from standard input. Each file
/// is copied from SOURCE to DEST when DEST lacks it or holds an older copy.
/// A newer file in DEST is never overwritten.
#[derive(Parser, Debug)]
#[command(name = "plunge")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  cd /src && find . -type f | plunge -v /src /backup")]
pub struct Cli {
    /// Report every file, including those not copied
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be copied without copying
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List files in DEST that are not in SOURCE
    #[arg(short, long)]
    pub purge: bool,

    /// Settings file (.toml, .json, .yaml)
    #[arg(short, long, env = "PLUNGE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to copy from
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Directory to copy into
    #[arg(value_name = "DEST")]
    pub dest: String,
}
