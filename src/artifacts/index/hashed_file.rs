use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::Context;
use bytes::Bytes;
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read, Write};
use std::ops::DerefMut;

/// Locked index file that folds every byte passing through it into a running SHA-1
///
/// The digest covers the header and entries only; the trailer is written by
/// [`HashedFile::seal`] and checked by [`HashedFile::verify_trailer`] without being hashed.
#[derive(Debug)]
pub struct HashedFile<'f> {
    file: FileGuard<&'f mut File>,
    hasher: Sha1,
}

impl<'f> HashedFile<'f> {
    pub(crate) fn new(file: FileGuard<&'f mut File>) -> Self {
        HashedFile {
            file,
            hasher: Sha1::new(),
        }
    }

    /// Exactly `len` bytes of index content
    pub(crate) fn read_record(&mut self, len: usize) -> anyhow::Result<Bytes> {
        let mut record = vec![0u8; len];
        self.read_exact(&mut record)
            .context("Index file ends in the middle of a record")?;

        Ok(Bytes::from(record))
    }

    /// Append the digest of everything written so far
    pub(crate) fn seal(mut self) -> anyhow::Result<()> {
        let digest = self.hasher.finalize();
        let file = self.file.deref_mut();
        file.write_all(digest.as_slice())
            .context("Failed to write the index checksum")?;
        file.flush()?;

        Ok(())
    }

    /// The stored trailer must match what was read, and must end the file
    pub(crate) fn verify_trailer(mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        let file = self.file.deref_mut();
        file.read_exact(&mut stored)
            .context("Index file is missing its checksum")?;

        let mut rest = Vec::new();
        file.read_to_end(&mut rest)?;
        anyhow::ensure!(rest.is_empty(), "Index file has {} bytes after its checksum", rest.len());

        anyhow::ensure!(
            stored == self.hasher.finalize().as_slice(),
            "Index checksum does not match its content"
        );

        Ok(())
    }
}

impl Read for HashedFile<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.file.deref_mut().read(buf)?;
        self.hasher.update(&buf[..read]);

        Ok(read)
    }
}

impl Write for HashedFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.file.deref_mut().write(buf)?;
        self.hasher.update(&buf[..written]);

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.deref_mut().flush()
    }
}
