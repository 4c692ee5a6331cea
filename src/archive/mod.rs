//! Archive access used by the rename pipeline.
//!
//! The pipeline only needs two capabilities:
//! - [`ArchiveSource`]: enumerate entries and read a file entry's bytes
//! - [`ArchiveSink`]: add a file entry and finalize the archive
//!
//! [`zip`] implements both on top of the `zip` crate. [`memory`] provides
//! in-memory implementations without any codec, useful for testing the
//! pipeline and for dry runs.

pub mod memory;
pub mod zip;

use crate::{ArchivePath, Result};

pub use self::memory::{MemorySink, MemorySource, NullSink};
pub use self::zip::{SinkOptions, ZipSink, ZipSource};

/// An entry as enumerated from a source archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Position of the entry in the source's enumeration order.
    pub index: usize,
    /// Raw entry name as stored in the archive.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl EntryInfo {
    /// Creates entry info, deriving the directory flag from a trailing `/`
    /// or `\` (some Windows tools write the latter).
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let is_directory = name.ends_with(['/', '\\']);
        Self {
            index,
            name,
            is_directory,
        }
    }
}

/// Read side of an archive.
pub trait ArchiveSource {
    /// Returns all entries (files and directories) in a stable order.
    fn entries(&self) -> &[EntryInfo];

    /// Reads the uncompressed content of the file entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadEntryFailed`](crate::Error::ReadEntryFailed)
    /// naming the entry if its bytes cannot be extracted.
    fn read_entry(&mut self, index: usize) -> Result<Vec<u8>>;

    /// Returns the file entries, directories excluded, in enumeration order.
    fn file_entries(&self) -> Vec<EntryInfo> {
        self.entries()
            .iter()
            .filter(|e| !e.is_directory)
            .cloned()
            .collect()
    }
}

/// Write side of an archive.
pub trait ArchiveSink {
    /// The finalized archive.
    type Output;

    /// Adds a file entry. Parent directories are implied by the path.
    fn add_entry(&mut self, path: &ArchivePath, data: &[u8]) -> Result<()>;

    /// Finalizes the archive.
    fn finish(self) -> Result<Self::Output>;
}
