use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::file_change::WorkspaceChange;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChange>;

/// Everything `status` reports, each part sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branches: Vec<BranchName>,
    pub current_branch: BranchName,
    pub staged_files: FileSet,
    pub removed_files: FileSet,
    pub unstaged_changes: ChangeSet,
    pub untracked_files: FileSet,
}

/// Compares the working tree against the index and the head commit
#[derive(new)]
pub struct Status<'a> {
    head: &'a Commit,
    index: &'a Index,
    workspace: &'a Workspace,
}

impl Status<'_> {
    pub fn initialize(
        &self,
        branches: Vec<BranchName>,
        current_branch: BranchName,
    ) -> anyhow::Result<StatusInfo> {
        let staged_files = self
            .index
            .added_entries()
            .map(|(path, _)| path.to_path_buf())
            .collect();
        let removed_files = self.index.removed_paths().map(PathBuf::from).collect();

        Ok(StatusInfo {
            branches,
            current_branch,
            staged_files,
            removed_files,
            unstaged_changes: self.detect_workspace_changes()?,
            untracked_files: self.scan_untracked()?,
        })
    }

    fn detect_workspace_changes(&self) -> anyhow::Result<ChangeSet> {
        let mut changes = ChangeSet::new();

        // what each path is expected to hold once committed
        let mut expected = self
            .head
            .files()
            .iter()
            .map(|(path, oid)| (path.as_path(), oid))
            .collect::<BTreeMap<_, _>>();
        for path in self.index.removed_paths() {
            expected.remove(path);
        }
        expected.extend(self.index.added_entries());

        for (path, oid) in expected {
            match self.workspace.hash_file(path)? {
                None => {
                    changes.insert(path.to_path_buf(), WorkspaceChange::Deleted);
                }
                Some(actual) if &actual != oid => {
                    changes.insert(path.to_path_buf(), WorkspaceChange::Modified);
                }
                Some(_) => {}
            }
        }

        Ok(changes)
    }

    fn scan_untracked(&self) -> anyhow::Result<FileSet> {
        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|path| {
                let tracked = self.head.tracks(path) || self.index.is_staged_for_addition(path);
                !tracked || self.index.is_staged_for_removal(path)
            })
            .collect())
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            match branch == &self.current_branch {
                true => writeln!(f, "*{branch}")?,
                false => writeln!(f, "{branch}")?,
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.unstaged_changes {
            writeln!(f, "{} ({change})", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)
    }
}
