use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::core::config::Config;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle on a repository rooted at a working directory
///
/// Owns one instance of every area; commands are implemented as `impl Repository`
/// blocks under `commands/`. The index mutex is held for the whole of a mutating
/// command, so commands on one repository never interleave.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    index: Arc<Mutex<Index>>,
    database: Database,
    commits: CommitGraph,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let git_path = path.join(METADATA_DIR);

        let index = Index::new(
            git_path.join("index").into_boxed_path(),
            git_path.join("staging").into_boxed_path(),
        );
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let commits = CommitGraph::new(
            git_path.join("commits").into_boxed_path(),
            config.abbrev_min,
        );
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            index: Arc::new(Mutex::new(index)),
            database,
            commits,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.head_path().exists()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        match self.is_initialized() {
            true => Ok(()),
            false => Err(GitletError::NotInitialized.into()),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commits(&self) -> &CommitGraph {
        &self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Id and content of the commit the active branch points at
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let oid = self.refs.read_head()?;
        let commit = self.commits.get_commit(&oid)?;

        Ok((oid, commit))
    }
}
