use crate::areas::repository::Repository;
use crate::artifacts::core::error::{GitletError, Result};

impl Repository {
    /// Unstage a pending addition, or stop tracking a committed file and delete it
    pub async fn rm(&mut self, file: &str) -> Result<()> {
        self.ensure_initialized()?;
        let path = self.workspace().normalize(file)?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;

        if index.is_staged_for_addition(&path) {
            index.unstage(&path);
        } else if let Some(oid) = head.blob_for(&path) {
            index.stage_remove(&path, oid);
            self.workspace().remove_file(&path)?;
        } else {
            return Err(GitletError::NoReasonToRemove { path });
        }

        index.write_updates()?;

        Ok(())
    }
}
