//! ZIP archives via the `zip` crate.

use std::io::{Cursor, Read, Seek, Write};

use ::zip::write::SimpleFileOptions;
use ::zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::{ArchiveSink, ArchiveSource, EntryInfo};
use crate::{ArchivePath, Error, Result};

/// Cap for the read buffer pre-allocation; declared sizes are untrusted.
const MAX_PREALLOC: u64 = 64 * 1024 * 1024;

/// Reads entries from a ZIP archive.
///
/// Entries are enumerated in central directory order.
pub struct ZipSource<R: Read + Seek> {
    archive: ZipArchive<R>,
    entries: Vec<EntryInfo>,
}

impl<'a> ZipSource<Cursor<&'a [u8]>> {
    /// Opens a ZIP archive held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptArchive`] if the bytes are not a ZIP archive.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        Self::open(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> ZipSource<R> {
    /// Opens a ZIP archive from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptArchive`] if the central directory cannot be
    /// parsed.
    ///
    /// # Duplicate names
    ///
    /// The `zip` crate indexes entries by name, so a central directory that
    /// lists the same name twice is collapsed to a single entry before it
    /// reaches the renamer. Such archives therefore lose entries silently on
    /// the read side; [`Error::NameCollision`] only guards the output.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| Error::CorruptArchive {
            reason: e.to_string(),
        })?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let name = archive
                .name_for_index(index)
                .ok_or_else(|| Error::CorruptArchive {
                    reason: format!("central directory has no entry {}", index),
                })?;
            entries.push(EntryInfo::new(index, name));
        }

        log::debug!("opened zip archive with {} entries", entries.len());
        Ok(Self { archive, entries })
    }

    /// Returns the number of entries, directories included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Read + Seek> ArchiveSource for ZipSource<R> {
    fn entries(&self) -> &[EntryInfo] {
        &self.entries
    }

    fn read_entry(&mut self, index: usize) -> Result<Vec<u8>> {
        let name = match self.entries.get(index) {
            Some(entry) => entry.name.clone(),
            None => {
                return Err(Error::read_entry(
                    format!("#{}", index),
                    "no such entry",
                ));
            }
        };

        let mut file = self
            .archive
            .by_index(index)
            .map_err(|e| Error::read_entry(name.as_str(), e))?;

        let mut data = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut data)
            .map_err(|e| Error::read_entry(name.as_str(), e))?;
        Ok(data)
    }
}

/// Options for the ZIP writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkOptions {
    /// Compress entries with Deflate; otherwise store them.
    pub compress: bool,
    /// Deflate level (0-9), `None` for the codec default.
    pub level: Option<i64>,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            compress: cfg!(feature = "deflate"),
            level: None,
        }
    }
}

impl SinkOptions {
    /// Creates default options: Deflate when available, default level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores entries without compression.
    pub fn stored() -> Self {
        Self {
            compress: false,
            level: None,
        }
    }

    /// Sets the Deflate level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the level is above 9.
    pub fn level(mut self, level: u32) -> Result<Self> {
        if level > 9 {
            return Err(Error::InvalidConfiguration(format!(
                "compression level {} is outside 0..=9",
                level
            )));
        }
        self.level = Some(i64::from(level));
        Ok(self)
    }

    fn method(&self) -> Result<CompressionMethod> {
        if !self.compress {
            return Ok(CompressionMethod::Stored);
        }
        #[cfg(feature = "deflate")]
        {
            Ok(CompressionMethod::Deflated)
        }
        #[cfg(not(feature = "deflate"))]
        {
            Err(Error::InvalidConfiguration(
                "compression requested but built without the deflate feature".into(),
            ))
        }
    }
}

/// Builds a ZIP archive in memory.
pub struct ZipSink {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    entries_written: usize,
}

impl ZipSink {
    /// Creates a sink with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(SinkOptions::default())
    }

    /// Creates a sink with the given options.
    pub fn with_options(options: SinkOptions) -> Result<Self> {
        let method = options.method()?;
        let level = if method == CompressionMethod::Stored {
            None
        } else {
            options.level
        };
        let file_options = SimpleFileOptions::default()
            .compression_method(method)
            .compression_level(level);

        Ok(Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: file_options,
            entries_written: 0,
        })
    }

    /// Returns the number of entries added so far.
    pub fn entries_written(&self) -> usize {
        self.entries_written
    }
}

impl ArchiveSink for ZipSink {
    type Output = Vec<u8>;

    fn add_entry(&mut self, path: &ArchivePath, data: &[u8]) -> Result<()> {
        let options = self
            .options
            .large_file(data.len() as u64 >= u64::from(u32::MAX));
        self.writer
            .start_file(path.as_str(), options)
            .map_err(|e| Error::write_entry(path.as_str(), e))?;
        self.writer
            .write_all(data)
            .map_err(|e| Error::write_entry(path.as_str(), e))?;
        self.entries_written += 1;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish().map_err(|e| Error::WriteFailed {
            path: String::new(),
            reason: format!("finalizing archive: {}", e),
        })?;
        Ok(cursor.into_inner())
    }
}
