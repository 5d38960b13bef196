//! Commit object
//!
//! A commit snapshots the whole tracked path set: a mapping from repository-relative
//! path to blob id, ordered by path. It records up to two parents (the second only
//! for merge commits), a timestamp and a message.
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! parent <primary-parent-sha>
//! parent <secondary-parent-sha>
//! date <epoch-seconds> <+hhmm>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Path to blob id mapping of a snapshot
pub type FileMap = BTreeMap<PathBuf, ObjectId>;

/// Parents and timestamp of a commit, enough to walk the graph
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
    pub timestamp: DateTime<FixedOffset>,
}

impl PartialOrd for SlimCommit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlimCommit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Empty for the initial commit, two entries for merge commits
    parents: Vec<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    files: FileMap,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        files: FileMap,
        message: String,
    ) -> Self {
        Commit {
            parents,
            timestamp,
            files,
            message,
        }
    }

    /// The root of every history: no parent, no files, stamped at the Unix epoch
    pub fn initial() -> Self {
        let epoch = FixedOffset::east_opt(0)
            .and_then(|utc| utc.timestamp_opt(0, 0).single())
            .unwrap_or_default();

        Commit::new(vec![], epoch, FileMap::new(), INITIAL_COMMIT_MESSAGE.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp as shown by `log`, e.g. "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents.clone(),
            timestamp: self.timestamp,
        }
    }

    fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, offset) = value
            .split_once(' ')
            .context("Invalid commit object: malformed date line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: malformed timestamp")?;

        let sign = match offset.as_bytes().first() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => anyhow::bail!("Invalid commit object: malformed timezone {offset}"),
        };
        let digits = offset
            .get(1..)
            .filter(|digits| digits.len() == 4)
            .context("Invalid commit object: malformed timezone")?;
        let hours = digits[..2].parse::<i32>()?;
        let minutes = digits[2..].parse::<i32>()?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .and_then(|tz| tz.timestamp_opt(seconds, 0).single())
            .context("Invalid commit object: timestamp out of range")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.files {
            let path = path
                .to_str()
                .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
            if path.contains(['\n', '\r']) {
                anyhow::bail!("Path contains a line break: {path:?}");
            }
            lines.push(format!("file {oid} {path}"));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        Ok(frame(self.object_type(), lines.join("\n").as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        // the header never contains blank lines, the message may
        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut files = FileMap::new();

        for line in header.lines() {
            let (keyword, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line}"))?;

            match keyword {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "date" => timestamp = Some(Self::parse_date(value)?),
                "file" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: malformed file line")?;
                    files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown keyword {keyword}"),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing date line")?;
        Ok(Self::new(parents, timestamp, files, message.to_string()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
