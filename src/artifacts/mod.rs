//! Value types and algorithms
//!
//! - `branch`: branch name validation
//! - `checkout`: planning the working tree changes of a checkout
//! - `core`: errors, configuration and the pager writer
//! - `index`: on-disk layout of the staging area
//! - `log`: commit history traversal
//! - `merge`: split point search and three-way resolution
//! - `objects`: object ids, blobs and commits
//! - `status`: working tree status report

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
