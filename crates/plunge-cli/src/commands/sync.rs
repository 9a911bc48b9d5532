//! The sync command
//!
//! Merges settings from the optional config file with the command-line
//! flags, then runs the engine over the file list.

use std::io::{BufRead, Write};
use std::path::Path;

use plunge_core::{Settings, SyncEngine, SyncOptions, SyncReport};
use plunge_fs::{ConfigStore, NormalizedPath};
use tracing::debug;

use crate::error::Result;
use crate::input::read_paths;

/// Command-line switches that override settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub verbose: bool,
    pub dry_run: bool,
    pub purge: bool,
}

/// Load settings from `config`, or defaults when no file is given, and
/// switch on anything the flags request.
pub fn load_settings(config: Option<&Path>, flags: Flags) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => {
            debug!(config = %path.display(), "loading settings");
            ConfigStore::new().load::<Settings>(&NormalizedPath::new(path))?
        }
        None => Settings::default(),
    };

    settings.verbose |= flags.verbose;
    settings.dry_run |= flags.dry_run;
    settings.purge |= flags.purge;
    Ok(settings)
}

/// Run the sync command
///
/// Reads the file list from `input` and writes the report to `out`.
pub fn run_sync<R: BufRead, W: Write>(
    source: &str,
    dest: &str,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<SyncReport> {
    let paths = read_paths(input)?;
    debug!(count = paths.len(), source, dest, "file list read");

    let engine = SyncEngine::new(
        NormalizedPath::new(source),
        NormalizedPath::new(dest),
        SyncOptions::from(settings),
    );
    Ok(engine.run(&paths, out)?)
}
