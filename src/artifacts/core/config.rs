//! Runtime configuration
//!
//! Configuration is read from the environment, the same way commit metadata is:
//!
//! - `GITLET_ABBREV_MIN`: shortest commit id prefix accepted when resolving abbreviations
//! - `GITLET_COMMIT_DATE`: fixed timestamp for new commits (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`)
//! - `GITLET_MERGE_BASE`: split point strategy, `best` or `latest`
//! - `NO_PAGER`: disable paging of `log` output

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const DEFAULT_ABBREV_MIN: usize = 4;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// How the split point of a merge is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeBaseStrategy {
    /// A common ancestor that is not an ancestor of any other common ancestor
    #[default]
    BestCommonAncestor,
    /// The shared ancestor with the latest timestamp
    LatestTimestamp,
}

impl TryFrom<&str> for MergeBaseStrategy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "best" => Ok(MergeBaseStrategy::BestCommonAncestor),
            "latest" => Ok(MergeBaseStrategy::LatestTimestamp),
            _ => Err(anyhow::anyhow!("Invalid merge base strategy: {}", value)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub abbrev_min: usize,
    pub commit_date: Option<DateTime<FixedOffset>>,
    pub merge_base: MergeBaseStrategy,
    pub pager: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            abbrev_min: DEFAULT_ABBREV_MIN,
            commit_date: None,
            merge_base: MergeBaseStrategy::default(),
            pager: false,
            color: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let abbrev_min = match std::env::var("GITLET_ABBREV_MIN") {
            Ok(value) => value
                .parse::<usize>()
                .with_context(|| format!("GITLET_ABBREV_MIN is not a number: {value}"))?,
            Err(_) => DEFAULT_ABBREV_MIN,
        };

        let commit_date = match std::env::var("GITLET_COMMIT_DATE") {
            Ok(value) => Some(Self::parse_date(&value)?),
            Err(_) => None,
        };

        let merge_base = match std::env::var("GITLET_MERGE_BASE") {
            Ok(value) => MergeBaseStrategy::try_from(value.as_str())?,
            Err(_) => MergeBaseStrategy::default(),
        };

        Ok(Config {
            abbrev_min,
            commit_date,
            merge_base,
            pager: std::env::var_os("NO_PAGER").is_none(),
            color: false,
        })
    }

    pub fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(value)
            .or_else(|_| DateTime::parse_from_str(value, DATE_FORMAT))
            .with_context(|| format!("Invalid commit date: {value}"))
    }

    pub fn with_commit_date(self, commit_date: DateTime<FixedOffset>) -> Self {
        Config {
            commit_date: Some(commit_date),
            ..self
        }
    }

    pub fn with_merge_base(self, merge_base: MergeBaseStrategy) -> Self {
        Config { merge_base, ..self }
    }

    /// Timestamp to stamp on a new commit
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
