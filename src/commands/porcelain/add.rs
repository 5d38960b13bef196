use crate::areas::repository::Repository;
use crate::artifacts::core::error::{GitletError, Result};
use log::debug;

impl Repository {
    /// Stage the current content of `file`
    ///
    /// Adding a file that is staged for removal cancels the removal and restores the
    /// committed version.
    pub async fn add(&mut self, file: &str) -> Result<()> {
        self.ensure_initialized()?;
        let path = self.workspace().normalize(file)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;

        if index.is_staged_for_removal(&path) {
            if let Some(oid) = head.blob_for(&path) {
                let content = self.database().get(oid)?;
                self.workspace().write_file(&path, &content)?;
            }
            index.unstage(&path);
            index.write_updates()?;
            debug!("cancelled removal of {}", path.display());

            return Ok(());
        }

        if !self.workspace().exists(&path) {
            return Err(GitletError::FileNotFound { path });
        }

        let content = self.workspace().read_file(&path)?;
        index.stage_add(&path, &content, head.blob_for(&path))?;
        index.write_updates()?;

        Ok(())
    }
}
