//! Orphan detection in the destination tree
//!
//! Walks DEST and reports every entry with no counterpart in SOURCE. An
//! entry is "known" when the skip-list (the source-mapped paths of the
//! processed file list) accounts for it, or when it exists in SOURCE.
//! Known directories are descended into; unknown ones are reported as a
//! single line. Nothing is ever deleted.

use std::io::Write;

use tracing::{debug, warn};

use plunge_fs::{DirEntry, DirLister, NormalizedPath, PathResolver, io};

use crate::Result;
use crate::display::{MAX_LINE_LENGTH, format_path};

/// Source-mapped absolute paths known to exist in SOURCE.
///
/// Lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    entries: Vec<String>,
}

impl SkipList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Build the skip-list by resolving each relative path against `root`.
    ///
    /// Paths that cannot be resolved were already diagnosed while syncing
    /// and are left out.
    pub fn from_relative(resolver: &PathResolver, root: &NormalizedPath, paths: &[String]) -> Self {
        let entries = paths
            .iter()
            .filter_map(|relative| resolver.resolve(root, relative).ok())
            .map(NormalizedPath::into_string)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `path` is listed exactly.
    pub fn contains_file(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Whether any listed path lies under `prefix` (which ends in a
    /// separator).
    pub fn covers_dir(&self, prefix: &str) -> bool {
        self.entries.iter().any(|entry| entry.starts_with(prefix))
    }
}

/// Orphans found by a purge scan, in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    orphans: Vec<String>,
}

impl PurgeReport {
    /// Destination-relative paths of the orphans.
    pub fn orphans(&self) -> &[String] {
        &self.orphans
    }

    pub fn len(&self) -> usize {
        self.orphans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orphans.is_empty()
    }

    fn push(&mut self, orphan: String) {
        self.orphans.push(orphan);
    }
}

/// Recursive walk of DEST against SOURCE.
pub struct PurgeScanner<'a> {
    lister: &'a dyn DirLister,
    resolver: PathResolver,
    skip_list: &'a SkipList,
    /// Byte offset into a destination path where the reported part begins
    offset: usize,
}

impl<'a> PurgeScanner<'a> {
    pub fn new(
        lister: &'a dyn DirLister,
        resolver: PathResolver,
        skip_list: &'a SkipList,
        offset: usize,
    ) -> Self {
        Self {
            lister,
            resolver,
            skip_list,
            offset,
        }
    }

    /// Scan `dst` (mirroring `src`), writing one line per orphan to `out`
    /// as soon as it is found.
    ///
    /// # Errors
    ///
    /// Only failures writing to `out` are returned. Unlistable directories
    /// and failed existence checks are logged and skipped.
    pub fn scan<W: Write>(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        out: &mut W,
    ) -> Result<PurgeReport> {
        let mut report = PurgeReport::default();
        self.scan_dir(src, dst, &mut report, out)?;
        Ok(report)
    }

    fn scan_dir<W: Write>(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        report: &mut PurgeReport,
        out: &mut W,
    ) -> Result<()> {
        let entries = match self.lister.open(dst) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("opendir: {}", e);
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("readdir: {}", e);
                    break;
                }
            };
            if entry.is_self_or_parent() {
                continue;
            }
            self.scan_entry(&entry, src, dst, report, out)?;
        }
        Ok(())
    }

    fn scan_entry<W: Write>(
        &self,
        entry: &DirEntry,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        report: &mut PurgeReport,
        out: &mut W,
    ) -> Result<()> {
        let mapped = match self.resolver.resolve(src, &entry.name) {
            Ok(path) => path,
            Err(e) => {
                warn!("{}", e);
                return Ok(());
            }
        };

        let listed = if entry.is_dir() {
            self.skip_list.covers_dir(&mapped.as_dir_prefix())
        } else {
            self.skip_list.contains_file(mapped.as_str())
        };

        let known = if listed {
            true
        } else {
            match io::exists(&mapped) {
                Ok(exists) => exists,
                Err(e) => {
                    warn!("stat: {}", e);
                    return Ok(());
                }
            }
        };

        if known && !entry.is_dir() {
            return Ok(());
        }

        let target = match self.resolver.resolve(dst, &entry.name) {
            Ok(path) => path,
            Err(e) => {
                warn!("{}", e);
                return Ok(());
            }
        };

        if known {
            debug!(dir = %target, "descending");
            return self.scan_dir(&mapped, &target, report, out);
        }

        let orphan = target
            .as_str()
            .get(self.offset..)
            .unwrap_or(target.as_str())
            .to_string();
        write!(out, "{}", format_path(&orphan, MAX_LINE_LENGTH))?;
        out.flush()?;
        report.push(orphan);
        Ok(())
    }
}
