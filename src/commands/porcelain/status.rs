use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use crate::artifacts::status::status_info::{Status, StatusInfo};

impl Repository {
    pub async fn status(&mut self) -> Result<StatusInfo> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;
        let status = Status::new(&head, &index, self.workspace()).initialize(
            self.refs().list_branches()?,
            self.refs().current_branch()?,
        )?;

        write!(self.writer(), "{status}")?;

        Ok(status)
    }
}
