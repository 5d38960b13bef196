use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::{GitletError, Result};
use crate::artifacts::merge::resolution::{Resolution, conflict_markers, resolve, union_of_paths};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::commit::{Commit, FileMap};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use log::debug;
use std::path::Path;

/// How a merge ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other branch is already contained in the current one
    AncestorOfCurrent,
    /// The current branch was moved to the other branch's tip
    FastForwarded,
    /// A three-way merge ran; `commit` is `None` when it staged nothing
    Merged {
        commit: Option<ObjectId>,
        conflicted: bool,
    },
}

impl Repository {
    /// Merge the branch `other` into the active branch
    pub async fn merge(&mut self, other: &str) -> Result<MergeOutcome> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if !index.is_empty() {
            return Err(GitletError::UncommittedChanges);
        }

        let branch_not_found = || GitletError::BranchNotFound {
            name: other.to_string(),
        };
        let other_branch = BranchName::try_parse(other.to_string()).map_err(|_| branch_not_found())?;
        let other_oid = self
            .refs()
            .read_branch(&other_branch)?
            .ok_or_else(branch_not_found)?;

        let current_branch = self.refs().current_branch()?;
        if current_branch == other_branch {
            return Err(GitletError::MergeWithSelf);
        }

        let (current_oid, current) = self.head_commit()?;
        let other = self.commits().get_commit(&other_oid)?;

        Migration::plan(&current, &other, self.workspace()).check_untracked()?;

        let split_oid = SplitPointFinder::new(
            |oid| self.commits().get_slim_commit(oid),
            self.config().merge_base,
        )
        .find(&current_oid, &other_oid)?;
        debug!("split point of {current_branch} and {other_branch}: {split_oid:?}");

        if split_oid.as_ref() == Some(&other_oid) {
            writeln!(self.writer(), "Given branch is an ancestor of the current branch.")?;
            return Ok(MergeOutcome::AncestorOfCurrent);
        }

        if split_oid.as_ref() == Some(&current_oid) {
            self.switch_snapshot(&mut index, &current, &other)?;
            index.write_updates()?;
            self.refs().update_head(&other_oid)?;

            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForwarded);
        }

        // unrelated histories are compared against an empty snapshot
        let split_files = match &split_oid {
            Some(split_oid) => self.commits().get_commit(split_oid)?.files().clone(),
            None => FileMap::new(),
        };

        let conflicted = self.apply_resolutions(&mut index, &split_files, &current, &other)?;

        let commit = match index.is_empty() {
            true => None,
            false => {
                let message = format!("Merged {other_branch} into {current_branch}.");
                Some(self.write_commit(&mut index, &message, Some(other_oid))?)
            }
        };
        index.write_updates()?;

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(MergeOutcome::Merged { commit, conflicted })
    }

    /// Apply the three-way rules to every path and stage the results; returns whether
    /// any path conflicted
    fn apply_resolutions(
        &self,
        index: &mut Index,
        split: &FileMap,
        current: &Commit,
        other: &Commit,
    ) -> anyhow::Result<bool> {
        let mut conflicted = false;

        for path in union_of_paths([split, current.files(), other.files()]) {
            let resolution = resolve(split.get(path), current.blob_for(path), other.blob_for(path));
            debug!("{}: {:?}", path.display(), resolution);

            match resolution {
                Resolution::Keep => {}
                Resolution::Take(oid) => {
                    let content = self.database().get(&oid)?;
                    self.write_and_stage(index, path, &content, current)?;
                }
                Resolution::Remove => {
                    if let Some(tracked) = current.blob_for(path) {
                        index.stage_remove(path, tracked);
                    }
                    self.workspace().remove_file(path)?;
                }
                Resolution::Conflict {
                    current: current_oid,
                    other: other_oid,
                } => {
                    let content = conflict_markers(
                        &self.blob_or_empty(current_oid.as_ref())?,
                        &self.blob_or_empty(other_oid.as_ref())?,
                    );
                    self.write_and_stage(index, path, &content, current)?;
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }

    fn write_and_stage(
        &self,
        index: &mut Index,
        path: &Path,
        content: &[u8],
        current: &Commit,
    ) -> anyhow::Result<()> {
        self.workspace().write_file(path, content)?;
        index.stage_add(path, content, current.blob_for(path))
    }

    fn blob_or_empty(&self, oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match oid {
            Some(oid) => self.database().get(oid),
            None => Ok(Bytes::new()),
        }
    }
}
