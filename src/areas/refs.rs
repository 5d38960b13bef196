//! Branch table and HEAD
//!
//! Every branch is a file under `.gitlet/refs/heads` holding the 40-character id of its
//! tip commit. `HEAD` is always symbolic (`ref: refs/heads/<name>`): it names the active
//! branch, never a commit directly.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use log::{debug, info};
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

const SYMREF_REGEX: &str = r"^ref: (.+)$";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        if branch_path.is_file() {
            return Err(GitletError::BranchAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }
        if let Some(existing) = self.colliding_branch(&branch_path) {
            return Err(GitletError::BranchNameCollision {
                name: name.to_string(),
                existing,
            }
            .into());
        }

        self.update_ref_file(&branch_path, oid.as_ref())?;
        info!("created branch {name} at {oid}");

        Ok(())
    }

    /// Delete a branch reference; commits stay untouched
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let oid = self.read_branch(name)?.ok_or_else(|| GitletError::BranchNotFound {
            name: name.to_string(),
        })?;

        if &self.current_branch()? == name {
            return Err(GitletError::RemoveCurrentBranch.into());
        }

        let branch_path = self.branch_path(name);
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        info!("deleted branch {name} (was {oid})");

        Ok(oid)
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(name), oid.as_ref())?;
        debug!("moved {name} to {oid}");

        Ok(())
    }

    /// Make `name` the active branch
    pub fn set_head(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), &name.to_sym_ref())?;
        debug!("HEAD now points at {name}");

        Ok(())
    }

    /// Name of the active branch
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;

        let symref = regex::Regex::new(SYMREF_REGEX)?
            .captures(content.trim())
            .with_context(|| format!("HEAD is not a symbolic ref: {}", content.trim()))?;

        BranchName::try_parse_sym_ref(&symref[1])
    }

    /// Tip commit of the active branch
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let current = self.current_branch()?;

        self.read_branch(&current)?
            .with_context(|| format!("HEAD points at missing branch {current}"))
    }

    /// Move the active branch to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_branch(&self.current_branch()?, oid)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path.to_str()?.replace(std::path::MAIN_SEPARATOR, "/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    /// A branch whose file would have to be a directory for `branch_path` to exist,
    /// or that lives below `branch_path`
    fn colliding_branch(&self, branch_path: &Path) -> Option<String> {
        let heads_path = self.heads_path();
        let to_name = |path: &Path| {
            path.strip_prefix(&heads_path)
                .ok()
                .and_then(Path::to_str)
                .map(|name| name.replace(std::path::MAIN_SEPARATOR, "/"))
        };

        if let Some(ancestor) = branch_path
            .ancestors()
            .skip(1)
            .take_while(|ancestor| *ancestor != &*heads_path)
            .find(|ancestor| ancestor.is_file())
        {
            return to_name(ancestor);
        }

        if branch_path.is_dir() {
            return WalkDir::new(branch_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .find(|entry| entry.file_type().is_file())
                .and_then(|entry| to_name(entry.path()));
        }

        None
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.heads_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
