//! Settings loaded from an optional configuration file

use serde::{Deserialize, Serialize};

use plunge_fs::constants::DEFAULT_MAX_PATH_LENGTH;

/// User settings. Every field is optional in the file.
///
/// Boolean switches are OR-ed with the matching command-line flags, so a
/// config file can turn a behavior on but never off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Longest resolved path, in bytes, before a file is rejected
    pub max_path_length: usize,
    pub verbose: bool,
    pub dry_run: bool,
    pub purge: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            verbose: false,
            dry_run: false,
            purge: false,
        }
    }
}
