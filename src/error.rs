//! Error types for archive renaming.
//!
//! This module provides the [`Error`] enum which represents every way a
//! rename run can fail, along with a convenient [`Result<T>`] type alias.
//!
//! Every error is fatal to the run that produced it: the pipeline stops at
//! the first failure and discards any partially written output archive, so a
//! caller either receives a complete [`RenameReport`](crate::RenameReport) or
//! an `Error`, never both.
//!
//! # Example
//!
//! ```rust
//! use padzip::{Error, RenameOptions, rename_archive};
//! use padzip::progress::NoProgress;
//!
//! let result = rename_archive(b"definitely not a zip", &RenameOptions::default(), &mut NoProgress);
//! match result {
//!     Err(Error::CorruptArchive { .. }) => println!("The file is not a valid archive."),
//!     Err(Error::ReadEntryFailed { path, .. }) => println!("Could not read {path}"),
//!     Err(e) => println!("Error: {e}"),
//!     Ok(report) => println!("{} files renamed", report.stats.renamed_count),
//! }
//! ```

use std::io;

/// The main error type for rename runs.
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | Input | [`CorruptArchive`][Self::CorruptArchive] | Payload is not a readable archive |
/// | Entry | [`ReadEntryFailed`][Self::ReadEntryFailed] | One entry's bytes could not be extracted |
/// | Output | [`WriteFailed`][Self::WriteFailed], [`NameCollision`][Self::NameCollision] | The rebuilt archive cannot hold an entry |
/// | Configuration | [`InvalidConfiguration`][Self::InvalidConfiguration] | Padding width out of range |
/// | I/O | [`Io`][Self::Io] | File system operations (CLI only) |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred outside of archive decoding.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload is not a valid archive or could not be opened.
    ///
    /// Returned before any entry is processed; no outcomes exist yet.
    #[error("Corrupt archive: {reason}")]
    CorruptArchive {
        /// A description of what the decoder rejected.
        reason: String,
    },

    /// The content of a specific entry could not be extracted.
    ///
    /// Covers unsupported compression methods, encrypted entries, checksum
    /// mismatches and truncated entry data.
    #[error("Failed to read entry '{path}': {reason}")]
    ReadEntryFailed {
        /// Full path of the entry inside the source archive.
        path: String,
        /// A description of the failure.
        reason: String,
    },

    /// An entry could not be written into the output archive.
    #[error("Failed to write entry '{path}': {reason}")]
    WriteFailed {
        /// Full path of the entry inside the output archive.
        path: String,
        /// A description of the failure.
        reason: String,
    },

    /// Two source entries would be written under the same output path.
    ///
    /// For example `7.jpg` and `007.jpg` in the same directory both map to
    /// `007.jpg` at width 3.
    #[error("Output path '{path}' would be written twice")]
    NameCollision {
        /// The output path that was already taken.
        path: String,
    },

    /// The run configuration was rejected before processing began.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An entry path is not usable as an archive path.
    #[error("Invalid archive path: {0}")]
    InvalidArchivePath(String),
}

impl Error {
    /// Returns `true` if the source payload itself could not be opened.
    pub fn is_corrupt_archive(&self) -> bool {
        matches!(self, Error::CorruptArchive { .. })
    }

    /// Returns `true` if this error is tied to a single entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use padzip::Error;
    ///
    /// let err = Error::NameCollision { path: "album/007.jpg".into() };
    /// assert!(err.is_entry_failure());
    /// assert_eq!(err.entry_path(), Some("album/007.jpg"));
    /// ```
    pub fn is_entry_failure(&self) -> bool {
        matches!(
            self,
            Error::ReadEntryFailed { .. } | Error::WriteFailed { .. } | Error::NameCollision { .. }
        )
    }

    /// Returns the entry path this error refers to, if any.
    pub fn entry_path(&self) -> Option<&str> {
        match self {
            Error::ReadEntryFailed { path, .. }
            | Error::WriteFailed { path, .. }
            | Error::NameCollision { path } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn read_entry(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::ReadEntryFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_entry(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::WriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized Result type for rename operations.
pub type Result<T> = std::result::Result<T, Error>;
