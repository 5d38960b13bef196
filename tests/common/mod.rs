#![allow(dead_code)]

pub mod command;
pub mod file;

/// Date stamped on every commit made through `gitlet_commit`
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
