//! Plumbing shared by the porcelain commands
//!
//! - `write_commit`: turn the staged changes into a commit and advance the active branch
//! - `switch_snapshot`: replace the working tree of one commit with another's

mod switch_snapshot;
mod write_commit;
