//! Working tree status
//!
//! - `file_change`: how a file in the working tree differs from what would be committed
//! - `status_info`: the full status report and its rendering

pub mod file_change;
pub mod status_info;
