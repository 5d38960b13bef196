use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use log::info;

impl Repository {
    /// Record the staged changes on top of the head commit
    ///
    /// Staged blobs are published to the object store first, then the commit record,
    /// then the active branch is moved and the index cleared. A failure before the
    /// branch move leaves no visible commit. Merge commits (with a `second_parent`) may
    /// have nothing staged.
    pub(crate) fn write_commit(
        &self,
        index: &mut Index,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        if message.is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }
        if index.is_empty() && second_parent.is_none() {
            return Err(GitletError::NothingToCommit.into());
        }

        let (parent, head) = self.head_commit()?;

        let mut files = head.files().clone();
        for (path, oid) in index.added_entries() {
            self.database().import(index.staging(), oid)?;
            files.insert(path.to_path_buf(), oid.clone());
        }
        for path in index.removed_paths() {
            files.remove(path);
        }

        let commit_oid = self.commits().create_commit(
            message,
            Some(parent),
            files,
            second_parent,
            self.config().now(),
        )?;
        self.refs().update_head(&commit_oid)?;
        index.clear()?;

        info!("committed {} on {}", commit_oid, self.refs().current_branch()?);
        Ok(commit_oid)
    }
}
