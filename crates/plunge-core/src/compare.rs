//! Source/destination file comparison
//!
//! Modification time alone decides whether a file is copied; size only
//! refines the label shown for a newer source.

use tracing::{debug, error};

use plunge_fs::{FileStat, NormalizedPath, io};

/// Relationship between a source file and its destination counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComparisonOutcome {
    /// A stat failed for a reason other than not-found
    Error,
    SrcMissing,
    /// Source is a directory, symlink, device, ...
    SrcNotFile,
    DstMissing,
    DstNotFile,
    SameAge,
    DstNewer,
    SrcLargerNewer,
    SrcNewer,
}

/// Result of comparing one pair of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub outcome: ComparisonOutcome,
    /// Source metadata, present once the source is known to be a regular file
    pub source: Option<FileStat>,
}

impl Comparison {
    pub fn new(outcome: ComparisonOutcome) -> Self {
        Self {
            outcome,
            source: None,
        }
    }

    pub fn with_source(outcome: ComparisonOutcome, source: FileStat) -> Self {
        Self {
            outcome,
            source: Some(source),
        }
    }
}

/// Classify two regular files by mtime, then size.
pub fn classify(source: &FileStat, dest: &FileStat) -> ComparisonOutcome {
    use std::cmp::Ordering;

    match source.mtime.cmp(&dest.mtime) {
        Ordering::Equal => ComparisonOutcome::SameAge,
        Ordering::Less => ComparisonOutcome::DstNewer,
        Ordering::Greater if source.size > dest.size => ComparisonOutcome::SrcLargerNewer,
        Ordering::Greater => ComparisonOutcome::SrcNewer,
    }
}

/// Compare `src` against `dst`. Never touches the filesystem beyond stat.
///
/// Stat failures other than not-found are logged and yield
/// [`ComparisonOutcome::Error`].
pub fn compare(src: &NormalizedPath, dst: &NormalizedPath) -> Comparison {
    let source = match io::stat(src) {
        Ok(Some(stat)) => stat,
        Ok(None) => return Comparison::new(ComparisonOutcome::SrcMissing),
        Err(e) => {
            error!("stat: {}", e);
            return Comparison::new(ComparisonOutcome::Error);
        }
    };

    if !source.is_regular {
        return Comparison::new(ComparisonOutcome::SrcNotFile);
    }

    let dest = match io::stat(dst) {
        Ok(Some(stat)) => stat,
        Ok(None) => return Comparison::with_source(ComparisonOutcome::DstMissing, source),
        Err(e) => {
            error!("stat: {}", e);
            return Comparison::with_source(ComparisonOutcome::Error, source);
        }
    };

    if !dest.is_regular {
        return Comparison::with_source(ComparisonOutcome::DstNotFile, source);
    }

    let outcome = classify(&source, &dest);
    debug!(
        src = %src,
        src_mtime = source.mtime,
        dst_mtime = dest.mtime,
        ?outcome,
        "compared"
    );
    Comparison::with_source(outcome, source)
}
