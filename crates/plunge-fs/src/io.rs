//! Byte-level file operations used by the comparator and copier

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use filetime::FileTime;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Metadata captured for one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Size in bytes
    pub size: u64,
    /// Modification time, whole seconds since the Unix epoch
    pub mtime: i64,
    /// Whether this is a regular file (symlinks are not)
    pub is_regular: bool,
}

impl FileStat {
    pub fn from_metadata(metadata: &fs::Metadata) -> Self {
        Self {
            size: metadata.len(),
            mtime: FileTime::from_last_modification_time(metadata).unix_seconds(),
            is_regular: metadata.file_type().is_file(),
        }
    }
}

/// Stat a path without following symlinks.
///
/// Returns `Ok(None)` when the path does not exist.
pub fn stat(path: &NormalizedPath) -> Result<Option<FileStat>> {
    let native = path.to_native();
    match fs::symlink_metadata(&native) {
        Ok(metadata) => Ok(Some(FileStat::from_metadata(&metadata))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(native, e)),
    }
}

/// Check whether anything exists at `path`, following symlinks.
pub fn exists(path: &NormalizedPath) -> Result<bool> {
    let native = path.to_native();
    match fs::metadata(&native) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(native, e)),
    }
}

/// Read a file that is expected to hold exactly `size` bytes.
///
/// Fails with [`Error::ShortRead`] if fewer bytes are available and with
/// [`Error::SourceChanged`] if the file has grown since it was measured.
pub fn read_exact_size(path: &NormalizedPath, size: u64) -> Result<Vec<u8>> {
    let native = path.to_native();
    let file = File::open(&native).map_err(|e| Error::io(&native, e))?;

    let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    file.take(size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| Error::io(&native, e))?;

    let actual = buffer.len() as u64;
    if actual < size {
        return Err(Error::ShortRead {
            path: native,
            expected: size,
            actual,
        });
    }
    if actual > size {
        return Err(Error::SourceChanged {
            path: native,
            expected: size,
        });
    }
    Ok(buffer)
}

/// Make sure the parent directory chain of `path` exists.
pub fn ensure_parent_dir(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    match native.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_chain(parent),
        _ => Ok(()),
    }
}

fn create_dir_chain(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating directories");

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::constants::DIR_MODE);
    }
    builder.create(dir).map_err(|e| Error::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The file is truncated and written in place. A failure part way through
/// can leave a truncated file behind.
pub fn write_file(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let native = path.to_native();
    let mut file = File::create(&native).map_err(|e| Error::io(&native, e))?;
    file.write_all(content).map_err(|e| Error::io(&native, e))?;
    file.sync_all().map_err(|e| Error::io(&native, e))?;
    Ok(())
}

/// Set the modification time of `path` to `mtime` seconds and its access
/// time to now.
pub fn set_mtime(path: &NormalizedPath, mtime: i64) -> Result<()> {
    let native = path.to_native();
    filetime::set_file_times(&native, FileTime::now(), FileTime::from_unix_time(mtime, 0))
        .map_err(|e| Error::io(native, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
