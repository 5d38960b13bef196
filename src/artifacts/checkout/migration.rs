use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File system changes that turn the working tree for one commit into another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    /// Tracked by the current commit, absent from the target
    deletions: Vec<PathBuf>,
    /// Every file the target tracks
    writes: Vec<(PathBuf, ObjectId)>,
    /// Files on disk, unknown to the current commit, that the target would clobber
    untracked: Vec<PathBuf>,
}

impl Migration {
    pub fn plan(current: &Commit, target: &Commit, workspace: &Workspace) -> Self {
        let deletions = current
            .files()
            .keys()
            .filter(|path| !target.tracks(path))
            .cloned()
            .collect();

        let writes = target
            .files()
            .iter()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect();

        let mut untracked = BTreeSet::new();
        for path in target.files().keys() {
            if !current.tracks(path) && workspace.exists(path) {
                untracked.insert(path.clone());
            }

            // a file where the target needs a directory
            untracked.extend(
                path.ancestors()
                    .skip(1)
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .filter(|parent| workspace.exists(parent) && !current.tracks(parent))
                    .map(Path::to_path_buf),
            );

            // a directory where the target needs a file
            if workspace.is_dir(path) {
                untracked.extend(
                    workspace
                        .list_files_under(path)
                        .into_iter()
                        .filter(|file| !current.tracks(file)),
                );
            }
        }
        let untracked = untracked.into_iter().collect();

        Migration {
            deletions,
            writes,
            untracked,
        }
    }

    pub fn deletions(&self) -> &[PathBuf] {
        &self.deletions
    }

    pub fn writes(&self) -> &[(PathBuf, ObjectId)] {
        &self.writes
    }

    pub fn untracked(&self) -> &[PathBuf] {
        &self.untracked
    }

    /// Refuse to go on if applying the plan would overwrite an untracked file
    pub fn check_untracked(&self) -> anyhow::Result<()> {
        if self.untracked.is_empty() {
            return Ok(());
        }

        Err(GitletError::UntrackedFileInTheWay {
            paths: self.untracked.clone(),
        }
        .into())
    }
}
