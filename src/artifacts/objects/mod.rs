//! Stored object types
//!
//! Everything persisted in the object stores is content-addressed by the SHA-1 digest
//! of its serialized form `<type> <size>\0<payload>`. Two kinds exist:
//!
//! - **Blob**: the raw bytes of one file
//! - **Commit**: a snapshot mapping paths to blob ids, plus lineage and a message

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviation shown for merge parents in `log`
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
