use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

impl Repository {
    /// History of the active branch, following primary parents down to the initial commit
    pub fn log(&self) -> Result<()> {
        self.ensure_initialized()?;

        let head_oid = self.refs().read_head()?;
        for entry in RevList::new(self.commits(), head_oid) {
            let (commit_oid, commit) = entry?;
            self.display_commit(&commit_oid, &commit)?;
        }

        Ok(())
    }

    /// Every commit ever made, in no particular order
    pub fn global_log(&self) -> Result<()> {
        self.ensure_initialized()?;

        for (commit_oid, commit) in self.commits().all_commits()? {
            self.display_commit(&commit_oid, &commit)?;
        }

        Ok(())
    }

    fn display_commit(&self, commit_oid: &ObjectId, commit: &Commit) -> Result<()> {
        let header = format!("commit {commit_oid}");
        let header = match self.config().color {
            true => header.yellow().to_string(),
            false => header,
        };

        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "{header}")?;
        if let (Some(parent), Some(second_parent)) = (commit.parent(), commit.second_parent()) {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                parent.to_short_oid(),
                second_parent.to_short_oid()
            )?;
        }
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
