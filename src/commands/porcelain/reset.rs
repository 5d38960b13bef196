use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use log::info;

impl Repository {
    /// Check out an arbitrary commit and move the active branch to it
    pub async fn reset(&mut self, commit_ref: &str) -> Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        let target_oid = self.commits().resolve_short_id(commit_ref)?;
        let target = self.commits().get_commit(&target_oid)?;
        index.rehydrate()?;

        let (_, current) = self.head_commit()?;

        self.switch_snapshot(&mut index, &current, &target)?;
        index.write_updates()?;
        self.refs().update_head(&target_oid)?;

        info!("reset {} to {}", self.refs().current_branch()?, target_oid);
        Ok(())
    }
}
