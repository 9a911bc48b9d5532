//! [`TestTree`] builder for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tempfile::TempDir;

/// Which root of a [`TestTree`] to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Dest,
}

/// A temporary directory holding `src/` and `dst/` roots, with helpers to
/// lay out files with exact contents and modification times.
///
/// # Example
///
/// ```rust,no_run
/// use plunge_test_utils::{Side, TestTree};
///
/// let tree = TestTree::new();
/// tree.file(Side::Source, "a.txt", "new", 2_000);
/// tree.file(Side::Dest, "a.txt", "old", 1_000);
/// assert_eq!(tree.mtime(Side::Dest, "a.txt"), 1_000);
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create both roots in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::create_dir(temp_dir.path().join("dst")).unwrap();
        Self { temp_dir }
    }

    pub fn source(&self) -> PathBuf {
        self.temp_dir.path().join("src")
    }

    pub fn dest(&self) -> PathBuf {
        self.temp_dir.path().join("dst")
    }

    pub fn root(&self, side: Side) -> PathBuf {
        match side {
            Side::Source => self.source(),
            Side::Dest => self.dest(),
        }
    }

    /// Absolute path of `relative` under `side`.
    pub fn path(&self, side: Side, relative: &str) -> PathBuf {
        self.root(side).join(relative)
    }

    /// Write `content` at `relative` (creating parents) and set its mtime.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn file(&self, side: Side, relative: &str, content: &str, mtime: i64) -> PathBuf {
        let path = self.path(side, relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestTree::file: mkdir {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: write {}: {e}", path.display()));
        set_mtime(&path, mtime);
        path
    }

    /// Create directory `relative` (and parents) under `side`.
    pub fn dir(&self, side: Side, relative: &str) -> PathBuf {
        let path = self.path(side, relative);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::dir: mkdir {}: {e}", path.display()));
        path
    }

    /// Modification time of `relative`, in whole seconds.
    pub fn mtime(&self, side: Side, relative: &str) -> i64 {
        let metadata = fs::metadata(self.path(side, relative)).unwrap();
        FileTime::from_last_modification_time(&metadata).unix_seconds()
    }

    /// Contents of `relative` as a string.
    pub fn read(&self, side: Side, relative: &str) -> String {
        let path = self.path(side, relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestTree::read: {}: {e}", path.display()))
    }

    pub fn exists(&self, side: Side, relative: &str) -> bool {
        self.path(side, relative).exists()
    }

    /// Assert that `relative` has identical content and mtime on both sides.
    ///
    /// # Panics
    /// Panics with a descriptive message on any difference.
    pub fn assert_in_sync(&self, relative: &str) {
        assert_eq!(
            self.read(Side::Source, relative),
            self.read(Side::Dest, relative),
            "content differs for {relative}"
        );
        assert_eq!(
            self.mtime(Side::Source, relative),
            self.mtime(Side::Dest, relative),
            "mtime differs for {relative}"
        );
    }
}

/// Set `path`'s mtime (and atime) to `mtime` seconds.
pub fn set_mtime(path: &Path, mtime: i64) {
    let time = FileTime::from_unix_time(mtime, 0);
    filetime::set_file_times(path, time, time)
        .unwrap_or_else(|e| panic!("set_mtime: {}: {e}", path.display()));
}

/// Whether permission bits are bypassed for this process (e.g. root), in
/// which case tests relying on unreadable files cannot observe failures.
#[cfg(unix)]
pub fn running_as_root() -> bool {
    use std::os::unix::fs::PermissionsExt;

    let probe = TempDir::new().unwrap();
    let dir = probe.path().join("locked");
    fs::create_dir(&dir).unwrap();
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&dir).is_ok();
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
    readable
}
