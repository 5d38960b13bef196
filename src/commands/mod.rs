//! Repository operations
//!
//! - `plumbing`: building blocks shared by several commands (commit creation, snapshot switching)
//! - `porcelain`: the user-facing operations (add, commit, log, merge, etc.)

pub mod plumbing;
pub mod porcelain;

#[cfg(test)]
pub(crate) mod test_repository;
