//! Core utilities and shared types
//!
//! - `config`: environment-driven runtime configuration
//! - `error`: user-facing error taxonomy
//! - `pager`: `Write` adapter over the minus pager for long `log` output

pub mod config;
pub mod error;
pub mod pager;
