use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{GitletError, Result};
use crate::artifacts::objects::commit::Commit;
use log::{debug, info};

impl Repository {
    /// Restore `file` to its version in the head commit
    pub async fn checkout_file(&mut self, file: &str) -> Result<()> {
        self.ensure_initialized()?;

        let (_, head) = self.head_commit()?;
        self.restore_file(&head, file)
    }

    /// Restore `file` to its version in the commit named by `commit_ref`
    pub async fn checkout_file_from_commit(&mut self, commit_ref: &str, file: &str) -> Result<()> {
        self.ensure_initialized()?;

        let commit_oid = self.commits().resolve_short_id(commit_ref)?;
        let commit = self.commits().get_commit(&commit_oid)?;
        self.restore_file(&commit, file)
    }

    /// Switch the working tree and HEAD to another branch
    pub async fn checkout_branch(&mut self, name: &str) -> Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        let no_such_branch = || GitletError::NoSuchBranch {
            name: name.to_string(),
        };
        let branch = BranchName::try_parse(name.to_string()).map_err(|_| no_such_branch())?;
        let target_oid = self.refs().read_branch(&branch)?.ok_or_else(no_such_branch)?;

        if self.refs().current_branch()? == branch {
            return Err(GitletError::CheckoutCurrentBranch);
        }

        index.rehydrate()?;

        let (_, current) = self.head_commit()?;
        let target = self.commits().get_commit(&target_oid)?;

        self.switch_snapshot(&mut index, &current, &target)?;
        index.write_updates()?;
        self.refs().set_head(&branch)?;

        info!("switched to branch {branch}");
        Ok(())
    }

    fn restore_file(&self, commit: &Commit, file: &str) -> Result<()> {
        let path = self.workspace().normalize(file)?;
        let oid = commit
            .blob_for(&path)
            .ok_or_else(|| GitletError::FileNotInCommit { path: path.clone() })?;

        if self.workspace().hash_file(&path)?.as_ref() == Some(oid) {
            debug!("{} already up to date", path.display());
            return Ok(());
        }

        let content = self.database().get(oid)?;
        self.workspace().write_file(&path, &content)?;

        Ok(())
    }
}
