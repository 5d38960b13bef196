//! Commit graph
//!
//! An append-only DAG of commits kept in its own object store. Commits are named by
//! their full id or by any unique prefix at least `abbrev_min` characters long.

use crate::areas::database::Database;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::{Commit, FileMap, SlimCommit};
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset};
use log::debug;
use std::path::Path;

#[derive(Debug)]
pub struct CommitGraph {
    store: Database,
    abbrev_min: usize,
}

impl CommitGraph {
    pub fn new(path: Box<Path>, abbrev_min: usize) -> Self {
        CommitGraph {
            store: Database::new(path),
            abbrev_min,
        }
    }

    pub fn store(&self) -> &Database {
        &self.store
    }

    /// Record a new commit and return its id
    ///
    /// Fails with `EmptyCommitMessage` for an empty message. Whether there is anything to
    /// commit is the caller's concern.
    pub fn create_commit(
        &self,
        message: &str,
        parent: Option<ObjectId>,
        files: FileMap,
        second_parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
    ) -> anyhow::Result<ObjectId> {
        if message.is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }

        let parents = parent.into_iter().chain(second_parent).collect();
        let commit = Commit::new(parents, timestamp, files, message.to_string());

        self.store_commit(&commit)
    }

    /// Store an already built commit, e.g. the initial one
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let oid = self.store.store(commit)?;
        debug!("recorded commit {} ({} files)", oid, commit.files().len());

        Ok(oid)
    }

    pub fn get_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        if !self.store.contains(oid) {
            return Err(GitletError::CommitNotFound {
                reference: oid.to_string(),
            }
            .into());
        }

        self.store.load_commit(oid)
    }

    pub fn get_slim_commit(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        Ok(self.get_commit(oid)?.slim(oid.clone()))
    }

    /// Resolve a full or abbreviated commit id
    pub fn resolve_short_id(&self, reference: &str) -> anyhow::Result<ObjectId> {
        let not_found = || GitletError::CommitNotFound {
            reference: reference.to_string(),
        };

        if !ObjectId::is_valid_prefix(reference) {
            return Err(not_found().into());
        }

        if reference.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(reference.to_string())?;
            return match self.store.contains(&oid) {
                true => Ok(oid),
                false => Err(not_found().into()),
            };
        }

        if reference.len() < self.abbrev_min {
            debug!("prefix {reference} is shorter than {} characters", self.abbrev_min);
            return Err(not_found().into());
        }

        let mut candidates = self.store.find_objects_by_prefix(reference)?;
        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(not_found().into()),
            n => {
                debug!("prefix {reference} is ambiguous between {n} commits");
                Err(not_found().into())
            }
        }
    }

    /// Every stored commit, in no particular order
    pub fn all_commits(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        self.store
            .list_objects()?
            .into_iter()
            .map(|oid| {
                let commit = self.store.load_commit(&oid)?;
                Ok((oid, commit))
            })
            .collect()
    }

    /// Ids of all commits whose message is exactly `message`, sorted
    pub fn find_by_message(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = self
            .all_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();
        matches.sort();

        Ok(matches)
    }
}
