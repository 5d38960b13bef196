//! Staging area
//!
//! The index records the pending changes relative to the current commit: paths staged
//! for addition (with the blob to commit) and paths staged for removal. A path holds at
//! most one entry, so it is never staged both ways at once.
//!
//! Blobs staged for addition are kept in a separate staging store until commit time,
//! so the permanent object store only ever receives committed content.

use crate::areas::database::Database;
use crate::artifacts::index::hashed_file::HashedFile;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::staged_entry::{StageKind, StagedEntry};
use crate::artifacts::index::{ENTRY_FIXED_SIZE, HEADER_SIZE};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use log::debug;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    /// Blobs of staged additions
    staging: Database,
    entries: BTreeMap<PathBuf, StagedEntry>,
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>, staging_path: Box<Path>) -> Self {
        Index {
            path,
            staging: Database::new(staging_path),
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn staging(&self) -> &Database {
        &self.staging
    }

    /// Stage `content` as the next version of `path`
    ///
    /// If the content is what the current commit already tracks, any pending change for
    /// the path is dropped instead, returning it to "unchanged". Staging the same content
    /// twice is a no-op.
    pub fn stage_add(
        &mut self,
        path: &Path,
        content: &[u8],
        committed: Option<&ObjectId>,
    ) -> anyhow::Result<()> {
        let blob = Blob::from(content);
        let oid = blob.object_id()?;

        if committed == Some(&oid) {
            if self.entries.remove(path).is_some() {
                debug!("{} matches the current commit, unstaged", path.display());
                self.changed = true;
            }
            return Ok(());
        }

        if let Some(entry) = self.entries.get(path)
            && entry.is_addition()
            && entry.oid == oid
        {
            return Ok(());
        }

        self.staging.store(&blob)?;
        self.entries.insert(
            path.to_path_buf(),
            StagedEntry::new(path.to_path_buf(), oid, StageKind::Addition),
        );
        self.changed = true;
        debug!("staged {} for addition", path.display());

        Ok(())
    }

    /// Stage the removal of a tracked path, discarding any pending addition
    ///
    /// Deleting the working file is left to the caller.
    pub fn stage_remove(&mut self, path: &Path, tracked: &ObjectId) {
        self.entries.insert(
            path.to_path_buf(),
            StagedEntry::new(path.to_path_buf(), tracked.clone(), StageKind::Removal),
        );
        self.changed = true;
        debug!("staged {} for removal", path.display());
    }

    /// Drop whatever is staged for `path`
    pub fn unstage(&mut self, path: &Path) -> Option<StagedEntry> {
        let entry = self.entries.remove(path);
        if entry.is_some() {
            self.changed = true;
        }
        entry
    }

    /// Forget every pending change along with the staged blobs
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.staging.clear()?;
        self.changed = true;

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, path: &Path) -> Option<&StagedEntry> {
        self.entries.get(path)
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        self.entry(path).is_some_and(StagedEntry::is_addition)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.entry(path).is_some_and(StagedEntry::is_removal)
    }

    /// Staged additions, sorted by path
    pub fn added_entries(&self) -> impl Iterator<Item = (&Path, &ObjectId)> {
        self.entries
            .values()
            .filter(|entry| entry.is_addition())
            .map(|entry| (entry.path.as_path(), &entry.oid))
    }

    /// Paths staged for removal, sorted
    pub fn removed_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .values()
            .filter(|entry| entry.is_removal())
            .map(|entry| entry.path.as_path())
    }

    pub fn staged_content(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        self.staging.get(oid)
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file is an empty index. The trailing checksum is
    /// verified. Holds a shared lock while reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(&self.path)?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = HashedFile::new(lock);
        let entries_count = self.parse_header(&mut reader)?;
        self.parse_entries(entries_count, &mut reader)?;
        reader.verify_trailer()?;

        debug!("loaded index with {} entries", self.entries.len());
        Ok(())
    }

    fn parse_header(&self, reader: &mut HashedFile) -> anyhow::Result<u32> {
        let header_bytes = reader.read_record(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;

        header.validate()
    }

    fn parse_entries(&mut self, entries_count: u32, reader: &mut HashedFile) -> anyhow::Result<()> {
        for _ in 0..entries_count {
            let fixed = reader.read_record(ENTRY_FIXED_SIZE)?;
            let path = reader.read_record(StagedEntry::path_len(&fixed)?)?;

            let entry_bytes = [fixed.as_ref(), path.as_ref()].concat();
            let entry = StagedEntry::deserialize(std::io::Cursor::new(entry_bytes))?;

            self.entries.insert(entry.path.clone(), entry);
        }

        Ok(())
    }

    /// Persist the index if anything changed since it was loaded
    ///
    /// Holds an exclusive lock while writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = HashedFile::new(lock);

        let header = IndexHeader {
            entries_count: self.entries.len() as u32,
            ..IndexHeader::empty()
        };
        writer.write_all(&header.serialize()?)?;

        for entry in self.entries.values() {
            writer.write_all(&entry.serialize()?)?;
        }

        writer.seal()?;
        self.changed = false;
        debug!("wrote index with {} entries", self.entries.len());

        Ok(())
    }
}
