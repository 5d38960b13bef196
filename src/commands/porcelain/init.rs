use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{GitletError, Result};
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use log::info;
use std::fs;

impl Repository {
    pub async fn init(&mut self) -> Result<()> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;
        fs::create_dir_all(self.commits().store().objects_path())
            .context("Failed to create .gitlet/commits directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let index = self.index();
        let index = index.lock().await;
        fs::create_dir_all(index.staging().objects_path())
            .context("Failed to create .gitlet/staging directory")?;

        let initial_oid = self.commits().store_commit(&Commit::initial())?;
        let default_branch = BranchName::default_branch();
        self.refs().create_branch(&default_branch, &initial_oid)?;

        // HEAD goes last: its presence marks the repository as initialized
        self.refs()
            .set_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        info!("initialized repository at {}", self.git_path().display());
        Ok(())
    }
}
