//! Three-way merge rules
//!
//! Each path in the union of the split point, current and other snapshots is decided
//! from the blob ids it has in the three (absent = `None`). Blob ids stand in for
//! content: equal ids mean equal bytes.

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// What the merge does with one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the current version (or absence) alone
    Keep,
    /// Check out and stage the other side's blob
    Take(ObjectId),
    /// Delete and stage the removal
    Remove,
    /// Write conflict markers around both versions and stage the result
    Conflict {
        current: Option<ObjectId>,
        other: Option<ObjectId>,
    },
}

pub fn resolve(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    other: Option<&ObjectId>,
) -> Resolution {
    let conflict = || Resolution::Conflict {
        current: current.cloned(),
        other: other.cloned(),
    };

    match (split, current, other) {
        (None, None, None) => Resolution::Keep,
        // new on the other side only
        (None, None, Some(other)) => Resolution::Take(other.clone()),
        // new on the current side only
        (None, Some(_), None) => Resolution::Keep,
        // added on both sides, even with equal content
        (None, Some(_), Some(_)) => conflict(),
        // other side left it as it was at the split
        (Some(split), _, other) if other == Some(split) => Resolution::Keep,
        // current side left it alone: follow the other side, deletion included
        (Some(split), Some(current), other) if current == split => match other {
            Some(other) => Resolution::Take(other.clone()),
            None => Resolution::Remove,
        },
        // both sides made the same change
        (Some(_), current, other) if current == other => Resolution::Keep,
        // changed in different ways, or changed on one side and deleted on the other
        (Some(_), _, _) => conflict(),
    }
}

/// Every path tracked in any of the three snapshots, sorted
pub fn union_of_paths<'f>(snapshots: [&'f FileMap; 3]) -> BTreeSet<&'f Path> {
    snapshots
        .into_iter()
        .flat_map(|files| files.keys().map(PathBuf::as_path))
        .collect()
}

/// Conflict file content; an absent side contributes nothing
pub fn conflict_markers(current: &[u8], other: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(current.len() + other.len() + 32);

    content.extend_from_slice(b"<<<<<<< HEAD\n");
    content.extend_from_slice(current);
    content.extend_from_slice(b"=======\n");
    content.extend_from_slice(other);
    content.extend_from_slice(b">>>>>>>\n");

    content
}
