//! Directory listing capability
//!
//! The purge scanner only needs to open a directory, pull `(name, kind)`
//! pairs from it lazily, and close it. [`DirLister`] captures exactly that,
//! so the traversal is written once and the platform listing lives behind
//! one implementation.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Kind of a directory entry, as reported by the listing itself.
///
/// Symlinks are never followed, so a link to a directory is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

/// A single name yielded by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// `.` and `..`, which some listings report and traversal must skip.
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Lazily yielded entries of one open directory. Dropping it closes the
/// underlying handle.
pub type Entries<'a> = Box<dyn Iterator<Item = Result<DirEntry>> + 'a>;

/// Opens directories for listing.
pub trait DirLister {
    /// Open `dir` for listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened. Errors reading
    /// individual entries are yielded by the iterator.
    fn open<'a>(&'a self, dir: &NormalizedPath) -> Result<Entries<'a>>;
}

/// [`DirLister`] backed by `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirLister;

impl DirLister for StdDirLister {
    fn open<'a>(&'a self, dir: &NormalizedPath) -> Result<Entries<'a>> {
        let native = dir.to_native();
        let read_dir = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

        Ok(Box::new(read_dir.map(move |entry| {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            Ok(DirEntry::new(entry.file_name().to_string_lossy(), kind))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let dir = NormalizedPath::new(temp.path());
        let mut entries: Vec<DirEntry> = StdDirLister
            .open(&dir)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::new("a.txt", EntryKind::Other),
                DirEntry::new("sub", EntryKind::Directory),
            ]
        );
    }

    #[test]
    fn open_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let dir = NormalizedPath::new(temp.path().join("missing"));
        assert!(StdDirLister.open(&dir).is_err());
    }

    #[test]
    fn dot_entries_are_recognized() {
        assert!(DirEntry::new(".", EntryKind::Directory).is_self_or_parent());
        assert!(DirEntry::new("..", EntryKind::Directory).is_self_or_parent());
        assert!(!DirEntry::new(".hidden", EntryKind::Other).is_self_or_parent());
    }
}
