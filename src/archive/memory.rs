//! In-memory archive source and sinks.
//!
//! These carry entries as plain byte vectors with no codec in between, so
//! the rename pipeline can be exercised without building real archives.

use super::{ArchiveSink, ArchiveSource, EntryInfo};
use crate::{ArchivePath, Error, Result};

/// An archive source backed by vectors.
///
/// # Example
///
/// ```rust
/// use padzip::archive::{ArchiveSource, MemorySource};
///
/// let mut source = MemorySource::new()
///     .with_directory("album/")
///     .with_file("album/7.jpg", b"jpeg bytes")
///     .with_unreadable("album/8.jpg");
///
/// assert_eq!(source.file_entries().len(), 2);
/// assert_eq!(source.read_entry(1)?, b"jpeg bytes");
/// assert!(source.read_entry(2).is_err());
/// # Ok::<(), padzip::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<EntryInfo>,
    contents: Vec<Option<Vec<u8>>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from `(path, content)` pairs, all files.
    pub fn from_files<I, P, D>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<String>,
        D: Into<Vec<u8>>,
    {
        files
            .into_iter()
            .fold(Self::new(), |source, (path, data)| source.with_file(path, data))
    }

    /// Appends a file entry.
    pub fn with_file(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.push(path.into(), false, Some(data.into()));
        self
    }

    /// Appends a directory entry. A trailing `/` is added if missing.
    pub fn with_directory(mut self, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.ends_with(['/', '\\']) {
            path.push('/');
        }
        self.push(path, true, None);
        self
    }

    /// Appends a file entry whose content cannot be read.
    pub fn with_unreadable(mut self, path: impl Into<String>) -> Self {
        self.push(path.into(), false, None);
        self
    }

    fn push(&mut self, name: String, is_directory: bool, data: Option<Vec<u8>>) {
        self.entries.push(EntryInfo {
            index: self.entries.len(),
            name,
            is_directory,
        });
        self.contents.push(data);
    }
}

impl ArchiveSource for MemorySource {
    fn entries(&self) -> &[EntryInfo] {
        &self.entries
    }

    fn read_entry(&mut self, index: usize) -> Result<Vec<u8>> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| Error::read_entry(format!("#{}", index), "no such entry"))?;

        if entry.is_directory {
            return Err(Error::read_entry(entry.name.as_str(), "entry is a directory"));
        }

        match &self.contents[index] {
            Some(data) => Ok(data.clone()),
            None => Err(Error::read_entry(entry.name.as_str(), "content unavailable")),
        }
    }
}

/// A sink that keeps written entries as `(path, content)` pairs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries added so far.
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }
}

impl ArchiveSink for MemorySink {
    type Output = Vec<(String, Vec<u8>)>;

    fn add_entry(&mut self, path: &ArchivePath, data: &[u8]) -> Result<()> {
        self.files.push((path.as_str().to_string(), data.to_vec()));
        Ok(())
    }

    fn finish(self) -> Result<Self::Output> {
        Ok(self.files)
    }
}

/// A sink that discards everything; used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ArchiveSink for NullSink {
    type Output = ();

    fn add_entry(&mut self, _path: &ArchivePath, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}
