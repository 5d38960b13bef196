//! Switching the working tree between commit snapshots
//!
//! A [`migration::Migration`] is planned from the current and target snapshots before
//! anything is touched, so an untracked file in the way aborts the switch with the
//! working tree intact.

pub mod migration;
