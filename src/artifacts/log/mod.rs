//! Commit history traversal
//!
//! - `rev_list`: first-parent walk used by `log`, and the full ancestor closure
//!   (primary and secondary parents) used by merge

pub mod rev_list;
