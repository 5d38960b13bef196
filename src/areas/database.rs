//! Content-addressed object store
//!
//! Objects are zlib-compressed and stored at `<root>/<first-2>/<remaining-38>` under the
//! SHA-1 of their framed form. Stores are append-only: an id, once written, is never
//! rewritten or removed. The one exception is the index's staging store, which is
//! emptied wholesale once its blobs have been committed.

use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use log::debug;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw file bytes as a blob and return its id
    pub fn put(&self, content: &[u8]) -> anyhow::Result<ObjectId> {
        self.store(&Blob::from(content))
    }

    /// Read back the bytes stored under a blob id
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.load_blob(object_id)?.into_content())
    }

    /// Persist an object unless its id is already present; returns the id either way
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            debug!("{} {} already stored", object.object_type(), object_id);
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        debug!("stored {} {}", object.object_type(), object_id);

        Ok(object_id)
    }

    /// Copy an object from another store, keeping its compressed form
    pub fn import(&self, source: &Database, object_id: &ObjectId) -> anyhow::Result<()> {
        let object_path = self.path.join(object_id.to_path());
        if object_path.exists() {
            return Ok(());
        }

        let content = source.load(object_id)?;
        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )?;
        self.write_object(object_path, content)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Framed, decompressed object content
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());
        if !object_path.is_file() {
            return Err(GitletError::ObjectNotFound {
                oid: object_id.clone(),
            }
            .into());
        }

        self.read_object(object_path)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_object_as(object_id, ObjectType::Blob)?;
        Blob::deserialize(object_reader)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as(object_id, ObjectType::Commit)?;
        Commit::deserialize(object_reader)
            .with_context(|| format!("Corrupted commit {object_id}"))
    }

    fn parse_object_as(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> anyhow::Result<impl BufRead> {
        let mut object_reader = Cursor::new(self.load(object_id)?);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;
        if object_type != expected {
            anyhow::bail!("Object {object_id} is a {object_type}, expected a {expected}");
        }

        Ok(object_reader)
    }

    /// Every id in the store, in no particular order
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let mut object_ids = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(2).max_depth(2) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let dir_name = entry
                .path()
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|dir| dir.to_str())
                .unwrap_or_default();

            // temp files and strays don't parse as ids
            if let Some(object_id) = ObjectId::from_path_parts(dir_name, Path::new(entry.file_name())) {
                object_ids.push(object_id);
            }
        }

        Ok(object_ids)
    }

    /// Find all objects whose id starts with the given hex prefix.
    ///
    /// For prefixes of 2+ characters only the matching fan-out directory is read.
    /// More than one match means the prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.len() < 2 {
            return Ok(self
                .list_objects()?
                .into_iter()
                .filter(|oid| oid.as_ref().starts_with(&prefix))
                .collect());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        if !dir_path.is_dir() {
            return Ok(vec![]);
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir_path)? {
            let entry = entry?;
            let file_name = PathBuf::from(entry.file_name());

            if file_name.to_string_lossy().starts_with(file_prefix)
                && let Some(oid) = ObjectId::from_path_parts(dir_name, &file_name)
            {
                matches.push(oid);
            }
        }

        Ok(matches)
    }

    /// Drop every object; only used for the staging store
    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path)
                .with_context(|| format!("Unable to clear {}", self.path.display()))?;
        }
        std::fs::create_dir_all(&self.path)?;

        Ok(())
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;
        file.sync_all()?;

        // publish atomically
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
