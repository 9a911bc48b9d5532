//! Error types for plunge-fs

use std::path::PathBuf;

/// Result type for plunge-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plunge-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path too long ({length} > {max} bytes): {path}")]
    PathTooLong {
        path: String,
        length: usize,
        max: usize,
    },

    #[error("Short read from {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Source changed while reading {path}: expected {expected} bytes, found more")]
    SourceChanged { path: PathBuf, expected: u64 },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
