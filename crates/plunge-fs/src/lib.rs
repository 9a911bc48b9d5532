//! Filesystem primitives for plunge
//!
//! Provides bounded path resolution, directory listing, and the byte-level
//! read/write/stamp operations the sync engine is built on.

pub mod config;
pub mod constants;
pub mod dir;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use dir::{DirEntry, DirLister, EntryKind, StdDirLister};
pub use error::{Error, Result};
pub use io::FileStat;
pub use path::{NormalizedPath, PathResolver};
