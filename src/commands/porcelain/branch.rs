use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{GitletError, Result};

impl Repository {
    /// Create a branch at the head commit without switching to it
    pub fn branch(&mut self, branch_name: &str) -> Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head_oid = self.refs().read_head()?;

        self.refs().create_branch(&branch_name, &head_oid)?;

        Ok(())
    }

    /// Delete a branch reference; its commits stay in the graph
    pub fn rm_branch(&mut self, branch_name: &str) -> Result<()> {
        self.ensure_initialized()?;

        let branch_name =
            BranchName::try_parse(branch_name.to_string()).map_err(|_| GitletError::BranchNotFound {
                name: branch_name.to_string(),
            })?;

        self.refs().delete_branch(&branch_name)?;

        Ok(())
    }
}
