//! Command implementations for plunge-cli

pub mod sync;

pub use sync::{Flags, load_settings, run_sync};
