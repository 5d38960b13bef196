use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use log::debug;

impl Repository {
    /// Make the working tree match `target` instead of `current` and empty the index
    ///
    /// Nothing is touched if an untracked file would be overwritten.
    pub(crate) fn switch_snapshot(
        &self,
        index: &mut Index,
        current: &Commit,
        target: &Commit,
    ) -> anyhow::Result<()> {
        let migration = Migration::plan(current, target, self.workspace());
        migration.check_untracked()?;

        self.workspace()
            .apply_migration(&migration, self.database())?;
        index.clear()?;
        debug!("working tree now matches a commit with {} files", target.files().len());

        Ok(())
    }
}
