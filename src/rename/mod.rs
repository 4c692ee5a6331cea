//! Zero-padding the leading numeric prefix of file names in an archive.
//!
//! This module provides:
//! - the padding rule itself ([`pad_file_name`]), a pure string function
//! - outcome and statistics types ([`EntryOutcome`], [`ProcessingStats`])
//! - the [`Renamer`] pipeline, generic over archive source and sink
//!
//! # Example
//!
//! ```rust
//! use padzip::rename::{pad_file_name, PaddingWidth, RenameStatus};
//!
//! let width = PaddingWidth::new(3)?;
//! let (name, status) = pad_file_name("42_photo.png", width);
//! assert_eq!(name, "042_photo.png");
//! assert_eq!(status, RenameStatus::Renamed);
//! # Ok::<(), padzip::Error>(())
//! ```
//!
//! # Implementation Notes
//!
//! A run:
//! 1. Enumerates the source entries and keeps the file entries
//! 2. For each file, splits its path on the last `/`, applies the rule to
//!    the file name and rejoins the unchanged directory portion
//! 3. Copies the content bytes into the sink under the new path
//! 4. Finalizes the sink once every entry has been written
//!
//! Renaming never normalizes widths across entries: a prefix that already
//! has at least `width` digits is left alone, whatever its length.

mod options;
mod outcome;
mod pipeline;
mod rule;

pub use options::{PaddingWidth, RenameOptions};
pub use outcome::{EntryOutcome, ProcessingStats, RenameReport, RenameStatus};
pub use pipeline::{Renamer, rename_archive, rename_archive_with};
pub use rule::{pad_file_name, split_leading_digits};
