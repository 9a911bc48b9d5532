//! Normalized path handling and bounded root/relative resolution

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_MAX_PATH_LENGTH, SEPARATOR};
use crate::{Error, Result};

/// A path held as a string with forward-slash separators.
///
/// On Windows, backslashes are rewritten to forward slashes on construction.
/// Elsewhere the input is kept verbatim, since a backslash is a legal
/// filename character. Conversion to a native `PathBuf` happens only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let inner = if cfg!(windows) {
            path_str.replace('\\', "/")
        } else {
            path_str.into_owned()
        };
        Self { inner }
    }

    /// Get the internal string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length of the path in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment, inserting exactly one separator.
    ///
    /// No separator is added when this path already ends in one, or when
    /// it is empty.
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment);
        let joined = if self.inner.is_empty() || self.inner.ends_with(SEPARATOR) {
            format!("{}{}", self.inner, segment.inner)
        } else {
            format!("{}{}{}", self.inner, SEPARATOR, segment.inner)
        };
        Self { inner: joined }
    }

    /// Byte offset at which a child joined onto this path begins.
    ///
    /// `self.join(name).as_str()[self.child_offset()..] == name`.
    pub fn child_offset(&self) -> usize {
        if self.inner.is_empty() || self.inner.ends_with(SEPARATOR) {
            self.inner.len()
        } else {
            self.inner.len() + SEPARATOR.len_utf8()
        }
    }

    /// The path with a trailing separator, for prefix matching against
    /// descendants.
    pub fn as_dir_prefix(&self) -> String {
        if self.inner.ends_with(SEPARATOR) {
            self.inner.clone()
        } else {
            format!("{}{}", self.inner, SEPARATOR)
        }
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn into_string(self) -> String {
        self.inner
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

/// Joins roots and relative paths under a maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResolver {
    max_len: usize,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PATH_LENGTH)
    }
}

impl PathResolver {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Resolve `relative` against `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTooLong`] if the joined path exceeds the
    /// configured maximum.
    pub fn resolve(&self, root: &NormalizedPath, relative: &str) -> Result<NormalizedPath> {
        let joined = root.join(relative);
        if joined.len() > self.max_len {
            return Err(Error::PathTooLong {
                length: joined.len(),
                max: self.max_len,
                path: joined.into_string(),
            });
        }
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_single_separator() {
        let root = NormalizedPath::new("/s");
        assert_eq!(root.join("a.txt").as_str(), "/s/a.txt");
    }

    #[test]
    fn join_keeps_existing_trailing_separator() {
        let root = NormalizedPath::new("/s/");
        assert_eq!(root.join("a.txt").as_str(), "/s/a.txt");
    }

    #[test]
    fn join_onto_empty_root_adds_nothing() {
        let root = NormalizedPath::new("");
        assert_eq!(root.join("a.txt").as_str(), "a.txt");
    }

    #[test]
    fn child_offset_points_past_separator() {
        for root in ["/d", "/d/", ""] {
            let root = NormalizedPath::new(root);
            let child = root.join("sub/x.txt");
            assert_eq!(&child.as_str()[root.child_offset()..], "sub/x.txt");
        }
    }

    #[test]
    fn resolve_rejects_overlong_paths() {
        let resolver = PathResolver::new(8);
        let root = NormalizedPath::new("/s");
        assert!(resolver.resolve(&root, "abc").is_ok());

        let err = resolver.resolve(&root, "abcdefgh").unwrap_err();
        match err {
            Error::PathTooLong { length, max, path } => {
                assert_eq!(length, 11);
                assert_eq!(max, 8);
                assert_eq!(path, "/s/abcdefgh");
            }
            other => panic!("expected PathTooLong, got {other:?}"),
        }
    }

    #[test]
    fn resolve_accepts_path_at_limit() {
        let resolver = PathResolver::new(5);
        let root = NormalizedPath::new("/s");
        assert_eq!(resolver.resolve(&root, "ab").unwrap().as_str(), "/s/ab");
    }
}
