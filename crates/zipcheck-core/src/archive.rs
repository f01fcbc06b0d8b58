//! Sequential access to ZIP archive entries.

use std::io::Read;
use std::io::Seek;

use zip::ZipArchive;

use crate::Result;
use crate::ValidationError;

/// One archive entry read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Uncompressed size declared by the archive.
    pub size: u64,
    /// Compressed size declared by the archive.
    pub compressed_size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Entry content. Empty for directories.
    pub bytes: Vec<u8>,
}

/// Opened ZIP archive whose entries are visited in archive order.
pub struct FixtureArchive<R: Read + Seek> {
    inner: ZipArchive<R>,
}

impl<R: Read + Seek> FixtureArchive<R> {
    /// Opens a ZIP archive from a seekable reader.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArchive`] if the central directory
    /// cannot be read.
    pub fn open(reader: R) -> Result<Self> {
        let inner = ZipArchive::new(reader)
            .map_err(|e| ValidationError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;
        Ok(Self { inner })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Reads metadata and content of the entry at `index`.
    ///
    /// Content larger than `max_size` is rejected before and while reading,
    /// so a wrong size in the header cannot exhaust memory.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArchive`] if the entry cannot be
    /// read or decompressed, and [`ValidationError::EntryTooLarge`] if it
    /// exceeds `max_size`.
    pub fn read_entry(&mut self, index: usize, max_size: u64) -> Result<ArchiveEntry> {
        let mut file = self
            .inner
            .by_index(index)
            .map_err(|e| ValidationError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;

        let name = file.name().to_string();
        let size = file.size();
        let compressed_size = file.compressed_size();
        let is_dir = file.is_dir();

        if size > max_size {
            return Err(ValidationError::EntryTooLarge {
                entry: name,
                size,
                max: max_size,
            });
        }

        let mut bytes = Vec::new();
        if !is_dir {
            (&mut file)
                .take(max_size.saturating_add(1))
                .read_to_end(&mut bytes)
                .map_err(|e| {
                    ValidationError::InvalidArchive(format!("failed to decompress {name}: {e}"))
                })?;
        }

        let read = bytes.len() as u64;
        if read > max_size {
            return Err(ValidationError::EntryTooLarge {
                entry: name,
                size: read,
                max: max_size,
            });
        }

        Ok(ArchiveEntry {
            name,
            size,
            compressed_size,
            is_dir,
            bytes,
        })
    }

    /// Returns `(name, size, compressed_size)` of the entry at `index`
    /// without decompressing it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArchive`] if the entry header cannot
    /// be read.
    pub fn entry_metadata(&mut self, index: usize) -> Result<(String, u64, u64)> {
        let file = self
            .inner
            .by_index_raw(index)
            .map_err(|e| ValidationError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;
        Ok((file.name().to_string(), file.size(), file.compressed_size()))
    }
}
