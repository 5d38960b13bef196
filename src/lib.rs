//! Gitlet: a miniature version-control engine
//!
//! The crate is split the same way a Git repository is:
//!
//! - `areas`: the persistent building blocks (content store, commit graph, index, refs, workspace)
//! - `artifacts`: value types and algorithms (objects, checkout planning, merge, status)
//! - `commands`: user-facing operations implemented on top of [`Repository`]

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::repository::Repository;
pub use artifacts::core::config::Config;
pub use artifacts::core::error::{ErrorKind, GitletError, Result};
