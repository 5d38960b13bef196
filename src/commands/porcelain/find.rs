use crate::areas::repository::Repository;
use crate::artifacts::core::error::{GitletError, Result};
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Ids of every commit whose message is exactly `message`, one per line
    pub fn find(&self, message: &str) -> Result<Vec<ObjectId>> {
        self.ensure_initialized()?;

        let matches = self.commits().find_by_message(message)?;
        if matches.is_empty() {
            return Err(GitletError::NoCommitWithMessage);
        }

        for commit_oid in &matches {
            writeln!(self.writer(), "{commit_oid}")?;
        }

        Ok(matches)
    }
}
