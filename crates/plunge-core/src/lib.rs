//! Comparison, copy and purge engine for plunge
//!
//! This crate sits between the filesystem primitives in `plunge-fs` and the
//! `plunge` binary:
//!
//! ```text
//!          plunge-cli
//!              |
//!         plunge-core
//!   compare -> decide -> copy
//!        purge    display
//!              |
//!          plunge-fs
//! ```
//!
//! - **compare**: classify a source/destination pair by mtime, then size
//! - **decision**: map an outcome to a status label and a copy decision
//! - **copier**: copy bytes and stamp the destination mtime
//! - **purge**: report destination entries with no source counterpart
//! - **display**: fixed-width path fields with middle elision
//! - **engine**: drive a whole run and produce a [`SyncReport`]

pub mod compare;
pub mod config;
pub mod copier;
pub mod decision;
pub mod display;
pub mod engine;
pub mod error;
pub mod purge;

pub use compare::{Comparison, ComparisonOutcome, classify, compare};
pub use config::Settings;
pub use copier::copy_file;
pub use decision::{Decision, decide};
pub use display::{MAX_LINE_LENGTH, format_path};
pub use engine::{FileResult, SyncEngine, SyncOptions, SyncReport};
pub use error::{Error, Result};
pub use purge::{PurgeReport, PurgeScanner, SkipList};
