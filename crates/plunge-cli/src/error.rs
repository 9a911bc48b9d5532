//! Error types for plunge-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop a run before or while reporting
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from plunge-core
    #[error(transparent)]
    Core(#[from] plunge_core::Error),

    /// Error from plunge-fs
    #[error(transparent)]
    Fs(#[from] plunge_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
