use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> Result<ObjectId> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let commit_oid = self.write_commit(&mut index, message, None)?;
        index.write_updates()?;

        Ok(commit_oid)
    }
}
