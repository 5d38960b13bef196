//! User-facing operations
//!
//! Every command checks that the repository is initialized (except `init`), reports
//! its user-visible output through the repository writer, and fails with a
//! [`GitletError`](crate::GitletError) whose message is the one-line diagnostic.
//!
//! - `init`: create the metadata directory, the initial commit and `main`
//! - `add` / `rm`: stage additions and removals
//! - `commit`: record the staged changes
//! - `log` / `global_log` / `find`: inspect history
//! - `checkout`: restore files or switch branches
//! - `branch` / `rm_branch`: manage branches
//! - `status`: report staged and unstaged changes
//! - `reset`: move the active branch to another commit
//! - `merge`: three-way merge of another branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
