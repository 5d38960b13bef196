//! Index file format
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "GLIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length, sorted by path):
//!   - Kind: 0 = addition, 1 = removal (1 byte)
//!   - Blob id (20 bytes)
//!   - Path length (2 bytes)
//!   - Path (UTF-8)
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big-endian.

pub mod hashed_file;
pub mod index_header;
pub mod staged_entry;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// 4 bytes for marker, 4 for version, 4 for entries_count
pub const HEADER_SIZE: usize = 12;

pub const SIGNATURE: &str = "GLIX";

pub const VERSION: u32 = 1;

/// Kind, blob id and path length
pub const ENTRY_FIXED_SIZE: usize = 1 + 20 + 2;
