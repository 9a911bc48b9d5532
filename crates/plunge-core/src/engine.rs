//! SyncEngine implementation
//!
//! Drives each relative path through resolve → compare → decide → copy,
//! writing the fixed-width report as it goes, then optionally runs the purge
//! scan seeded with the processed paths.

use std::io::Write;

use tracing::{debug, error};

use plunge_fs::constants::DEFAULT_MAX_PATH_LENGTH;
use plunge_fs::{DirLister, NormalizedPath, PathResolver, StdDirLister};

use crate::Result;
use crate::compare::{Comparison, ComparisonOutcome, compare};
use crate::config::Settings;
use crate::copier::copy_file;
use crate::decision::decide;
use crate::display::{PURGE_BANNER, field_width, format_path, heading};
use crate::purge::{PurgeReport, PurgeScanner, SkipList};

/// Options for a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Report every file, not just copies
    pub verbose: bool,
    /// Decide and report, but never touch DEST
    pub dry_run: bool,
    /// Report DEST entries missing from SOURCE after syncing
    pub purge: bool,
    pub max_path_length: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            dry_run: false,
            purge: false,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
        }
    }
}

impl From<&Settings> for SyncOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            verbose: settings.verbose,
            dry_run: settings.dry_run,
            purge: settings.purge,
            max_path_length: settings.max_path_length,
        }
    }
}

/// What happened to one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: String,
    pub outcome: ComparisonOutcome,
    /// Whether the copy was performed and succeeded
    pub copied: bool,
}

/// Report from a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// One entry per input path, in input order
    pub files: Vec<FileResult>,
    /// Copies that were attempted and failed
    pub copy_failures: usize,
    /// Present when a purge scan ran
    pub purge: Option<PurgeReport>,
}

impl SyncReport {
    /// Number of input paths with the given outcome
    pub fn count(&self, outcome: ComparisonOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    /// Number of files actually copied
    pub fn copied(&self) -> usize {
        self.files.iter().filter(|f| f.copied).count()
    }

    /// Orphans reported by the purge scan, if one ran
    pub fn orphans(&self) -> &[String] {
        self.purge.as_ref().map(PurgeReport::orphans).unwrap_or_default()
    }
}

/// Engine for one SOURCE/DEST pair
pub struct SyncEngine {
    source: NormalizedPath,
    dest: NormalizedPath,
    options: SyncOptions,
    resolver: PathResolver,
    lister: Box<dyn DirLister>,
}

impl SyncEngine {
    /// Create an engine listing directories through the standard library.
    pub fn new(source: NormalizedPath, dest: NormalizedPath, options: SyncOptions) -> Self {
        Self {
            source,
            dest,
            options,
            resolver: PathResolver::new(options.max_path_length),
            lister: Box::new(StdDirLister),
        }
    }

    /// Replace the directory lister used by the purge scan.
    pub fn with_lister(mut self, lister: Box<dyn DirLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Sync every path in `paths`, writing the report to `out`.
    ///
    /// An empty list produces no output at all.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails. Per-file and
    /// per-directory failures are logged and reflected in the report.
    pub fn run<W: Write>(&self, paths: &[String], out: &mut W) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        if paths.is_empty() {
            return Ok(report);
        }

        writeln!(out)?;
        writeln!(out, "{}", heading(self.options.verbose))?;

        for relative in paths {
            let result = self.process_file(relative, &mut report, out)?;
            report.files.push(result);
        }

        if self.options.purge {
            writeln!(out, "{}", PURGE_BANNER)?;
            out.flush()?;
            report.purge = Some(self.purge(paths, out)?);
        }

        writeln!(out)?;
        out.flush()?;

        debug!(
            files = report.files.len(),
            copied = report.copied(),
            copy_failures = report.copy_failures,
            orphans = report.orphans().len(),
            "sync finished"
        );
        Ok(report)
    }

    fn process_file<W: Write>(
        &self,
        relative: &str,
        report: &mut SyncReport,
        out: &mut W,
    ) -> Result<FileResult> {
        let pair = self
            .resolver
            .resolve(&self.source, relative)
            .and_then(|src| Ok((src, self.resolver.resolve(&self.dest, relative)?)));

        let comparison = match &pair {
            Ok((src, dst)) => compare(src, dst),
            Err(e) => {
                error!("{}", e);
                Comparison::new(ComparisonOutcome::Error)
            }
        };

        let decision = decide(comparison.outcome, self.options.verbose);
        if let Some(label) = decision.label {
            let field = format_path(relative, field_width(self.options.verbose));
            writeln!(out, "{field}{label}")?;
            out.flush()?;
        }

        let mut copied = false;
        if decision.should_copy
            && !self.options.dry_run
            && let (Ok((src, dst)), Some(stat)) = (&pair, comparison.source)
        {
            match copy_file(src, dst, stat.size, stat.mtime) {
                Ok(()) => copied = true,
                Err(e) => {
                    error!("copy {}: {}", relative, e);
                    report.copy_failures += 1;
                }
            }
        }

        Ok(FileResult {
            path: relative.to_string(),
            outcome: comparison.outcome,
            copied,
        })
    }

    fn purge<W: Write>(&self, paths: &[String], out: &mut W) -> Result<PurgeReport> {
        let skip_list = SkipList::from_relative(&self.resolver, &self.source, paths);
        debug!(entries = skip_list.len(), "purge scan starting");

        let scanner = PurgeScanner::new(
            self.lister.as_ref(),
            self.resolver,
            &skip_list,
            self.dest.child_offset(),
        );
        scanner.scan(&self.source, &self.dest, out)
    }
}
