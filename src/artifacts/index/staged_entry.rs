//! One pending change in the index

use crate::artifacts::index::ENTRY_FIXED_SIZE;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Addition = 0,
    Removal = 1,
}

impl TryFrom<u8> for StageKind {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> anyhow::Result<Self> {
        match value {
            0 => Ok(StageKind::Addition),
            1 => Ok(StageKind::Removal),
            _ => Err(anyhow!("Invalid index entry kind: {}", value)),
        }
    }
}

/// A path staged for addition (with the staged blob) or for removal (with the blob
/// it was tracked as)
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagedEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
    pub kind: StageKind,
}

impl StagedEntry {
    pub fn is_addition(&self) -> bool {
        self.kind == StageKind::Addition
    }

    pub fn is_removal(&self) -> bool {
        self.kind == StageKind::Removal
    }

    /// Length of the variable path part, read from the fixed-size prefix
    pub(crate) fn path_len(fixed: &[u8]) -> anyhow::Result<usize> {
        if fixed.len() != ENTRY_FIXED_SIZE {
            return Err(anyhow!("Truncated index entry"));
        }
        Ok((&fixed[ENTRY_FIXED_SIZE - 2..]).read_u16::<NetworkEndian>()? as usize)
    }
}

impl Packable for StagedEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self
            .path
            .to_str()
            .with_context(|| format!("Path is not valid UTF-8: {}", self.path.display()))?;
        let path_len = u16::try_from(path.len())
            .with_context(|| format!("Path is too long for the index: {path}"))?;

        let mut bytes = Vec::with_capacity(ENTRY_FIXED_SIZE + path.len());
        bytes.write_u8(self.kind as u8)?;
        self.oid.write_h40_to(&mut bytes)?;
        bytes.write_u16::<NetworkEndian>(path_len)?;
        bytes.write_all(path.as_bytes())?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for StagedEntry {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let kind = StageKind::try_from(reader.read_u8()?)?;
        let oid = ObjectId::read_h40_from(&mut reader)?;
        let path_len = reader.read_u16::<NetworkEndian>()? as usize;

        let mut path = vec![0u8; path_len];
        reader.read_exact(&mut path)?;
        let path = String::from_utf8(path).context("Index entry path is not valid UTF-8")?;

        Ok(StagedEntry::new(PathBuf::from(path), oid, kind))
    }
}
