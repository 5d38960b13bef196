//! Three-way merge
//!
//! - `split_point`: choosing the common ancestor both branches are compared against
//! - `resolution`: the per-path rule table and conflict marker synthesis

pub mod resolution;
pub mod split_point;
