use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use log::debug;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the metadata directory, never part of the working tree
pub const METADATA_DIR: &str = ".gitlet";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user supplied path into a repository-relative one
    ///
    /// `./` components are dropped and `..` is resolved lexically. Paths that leave the
    /// working tree or point into the metadata directory are rejected.
    pub fn normalize(&self, path: &str) -> anyhow::Result<PathBuf> {
        let raw = Path::new(path);
        let raw = match raw.is_absolute() {
            true => raw.strip_prefix(&self.path).map_err(|_| GitletError::IncorrectOperands)?,
            false => raw,
        };

        let mut normalized = PathBuf::new();
        for component in raw.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(GitletError::IncorrectOperands.into());
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(GitletError::IncorrectOperands.into());
                }
            }
        }

        // commit records are line oriented
        if normalized.to_str().is_none_or(|path| path.contains(['\n', '\r'])) {
            return Err(GitletError::IncorrectOperands.into());
        }
        if normalized.as_os_str().is_empty() || Self::is_ignored(&normalized) {
            return Err(GitletError::IncorrectOperands.into());
        }

        Ok(normalized)
    }

    /// Every regular file in the working tree, relative and sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != METADATA_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components()
            .any(|component| component == Component::Normal(OsStr::new(METADATA_DIR)))
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn is_dir(&self, dir_path: &Path) -> bool {
        self.path.join(dir_path).is_dir()
    }

    /// Regular files below `dir_path`, relative to the working tree
    pub fn list_files_under(&self, dir_path: &Path) -> Vec<PathBuf> {
        let mut files = WalkDir::new(self.path.join(dir_path))
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        files
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Blob id the file's current content would get, or `None` if it is missing
    pub fn hash_file(&self, file_path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !self.exists(file_path) {
            return Ok(None);
        }

        Ok(Some(Blob::new(self.read_file(file_path)?).object_id()?))
    }

    /// Write a file, creating parent directories
    ///
    /// A directory in the way is only cleared when it holds no files.
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = file_path.parent() {
            self.make_directories(parent)?;
        }
        if path.is_dir() {
            let blocking = self.list_files_under(file_path);
            if !blocking.is_empty() {
                return Err(GitletError::UntrackedFileInTheWay { paths: blocking }.into());
            }
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove empty directory: {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;
        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file if present and prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }
        self.prune_empty_parent_dirs(file_path)
    }

    /// Delete what the migration drops, then write every file the target tracks
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for file_path in migration.deletions() {
            self.remove_file(file_path)?;
        }

        for (file_path, oid) in migration.writes() {
            let content = database.get(oid)?;
            self.write_file(file_path, &content)?;
        }

        debug!(
            "migrated workspace: {} deleted, {} written",
            migration.deletions().len(),
            migration.writes().len()
        );

        Ok(())
    }

    fn make_directories(&self, dir_path: &Path) -> anyhow::Result<()> {
        let mut current = self.path.to_path_buf();

        for component in dir_path.components() {
            current.push(component);

            if current.is_file() {
                let blocking = current
                    .strip_prefix(&self.path)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| current.clone());
                return Err(GitletError::UntrackedFileInTheWay {
                    paths: vec![blocking],
                }
                .into());
            }
            if !current.exists() {
                std::fs::create_dir(&current)
                    .with_context(|| format!("Failed to create directory: {:?}", current))?;
            }
        }

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, file_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            let dir_path = self.path.join(parent);

            if dir_path.is_dir() && dir_path.read_dir()?.next().is_none() {
                std::fs::remove_dir(&dir_path)?;
                self.prune_empty_parent_dirs(parent)?;
            }
        }

        Ok(())
    }
}
