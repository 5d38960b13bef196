//! Persistent building blocks of a repository
//!
//! - `database`: content-addressed object store for blobs
//! - `commit_graph`: commit store with abbreviated id lookup
//! - `index`: staging area for pending additions and removals
//! - `refs`: branch table and HEAD
//! - `workspace`: working directory file system operations
//! - `repository`: ties the areas together for one working directory

pub mod commit_graph;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
