//! Copy one file and stamp the destination with the source mtime

use tracing::debug;

use plunge_fs::{NormalizedPath, io};

use crate::Result;

/// Copy `size` bytes from `src` to `dst` and set the destination's mtime to
/// `mtime`.
///
/// Stamping the mtime is what makes the next comparison of this pair come
/// out as same-age. The destination is written in place, so a failed write
/// can leave it truncated.
///
/// # Errors
///
/// Fails if the source no longer holds exactly `size` bytes, if the
/// destination's parent directories cannot be created, or on any read,
/// write or timestamp error.
pub fn copy_file(src: &NormalizedPath, dst: &NormalizedPath, size: u64, mtime: i64) -> Result<()> {
    let content = io::read_exact_size(src, size)?;
    io::write_file(dst, &content)?;
    io::set_mtime(dst, mtime)?;
    debug!(src = %src, dst = %dst, size, mtime, "copied");
    Ok(())
}
