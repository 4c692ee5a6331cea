//! # padzip
//!
//! Zero-pad the leading numeric prefix of every file name inside a ZIP
//! archive, producing a new archive with the same directory structure and
//! the same file contents, plus a record of what changed.
//!
//! `7.jpg` becomes `007.jpg` at width 3, `42_photo.png` becomes
//! `042_photo.png`, while `0042.png` and `photo.jpg` are left alone.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use padzip::{RenameOptions, Result, rename_archive};
//!
//! fn main() -> Result<()> {
//!     let input = std::fs::read("photos.zip")?;
//!     let options = RenameOptions::new().width(3)?;
//!
//!     let report = rename_archive(&input, &options, &mut |percent: u8| {
//!         eprint!("\r{percent}%");
//!     })?;
//!
//!     for outcome in report.renamed() {
//!         println!("{} -> {}", outcome.original_path(), outcome.new_path());
//!     }
//!     println!(
//!         "{} of {} files renamed",
//!         report.stats.renamed_count, report.stats.total_files
//!     );
//!
//!     std::fs::write("photos_padded.zip", &report.stats.output_archive)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Archives
//!
//! The pipeline ([`rename::Renamer`]) only depends on the
//! [`archive::ArchiveSource`] and [`archive::ArchiveSink`] traits. ZIP is
//! provided by [`archive::ZipSource`] / [`archive::ZipSink`]; the in-memory
//! [`archive::MemorySource`] / [`archive::MemorySink`] need no codec at all.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`]. A run either succeeds completely or
//! fails with the first [`Error`] it meets; the partially built output
//! archive is discarded.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `deflate` | Yes | Read and write Deflate-compressed entries |
//! | `cli` | No | The `padzip` command-line tool |
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod archive_path;
pub mod error;
pub mod progress;
pub mod rename;

pub use archive_path::ArchivePath;
pub use error::{Error, Result};

// Re-export rename API at crate root for convenience
pub use rename::{
    EntryOutcome, PaddingWidth, ProcessingStats, RenameOptions, RenameReport, RenameStatus,
    Renamer, rename_archive, rename_archive_with,
};

// Re-export progress API
pub use progress::{NoProgress, ProgressReporter, ProgressState, StatisticsProgress};
