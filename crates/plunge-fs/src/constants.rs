//! Shared constants for path handling.

/// Separator used in every [`NormalizedPath`](crate::NormalizedPath).
pub const SEPARATOR: char = '/';

/// Default upper bound on the length (in bytes) of a resolved path.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Permission bits for directories created on the way to a destination file.
#[cfg(unix)]
pub const DIR_MODE: u32 = 0o775;
