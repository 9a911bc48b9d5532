//! Shared test utilities for the plunge workspace.
//!
//! Used as a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`](tree::TestTree), a paired SOURCE/DEST fixture

pub mod tree;

pub use tree::{Side, TestTree};
#[cfg(unix)]
pub use tree::running_as_root;
