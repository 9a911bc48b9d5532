//! Error types for plunge-core

/// Result type for plunge-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a sync run.
///
/// Per-file and per-subtree failures are logged and recorded in the
/// [`SyncReport`](crate::SyncReport) instead; only failures to emit the
/// report itself surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from plunge-fs
    #[error(transparent)]
    Fs(#[from] plunge_fs::Error),

    /// Writing the report failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
