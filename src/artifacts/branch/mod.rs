//! Branch names
//!
//! A branch name maps directly onto a file under `.gitlet/refs/heads`, so names that
//! would escape that directory, collide with lock files or contain control and
//! glob characters are rejected.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "main";
