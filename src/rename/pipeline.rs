//! The rename pipeline: read, rename, rewrite.

use std::collections::HashSet;

use crate::archive::{ArchiveSink, ArchiveSource, SinkOptions, ZipSink, ZipSource};
use crate::progress::{EntryProgress, ProgressReporter};
use crate::{ArchivePath, Error, Result};

use super::options::RenameOptions;
use super::outcome::{EntryOutcome, ProcessingStats, RenameReport, RenameStatus};
use super::rule::pad_file_name;

/// Renames the file entries of an archive into a new archive.
///
/// Entries are processed one at a time in the source's enumeration order.
/// Directory entries are not copied; the directories of file entries are
/// implied by their paths. Content bytes are copied unmodified.
///
/// # Example
///
/// ```rust
/// use padzip::archive::{MemorySink, MemorySource};
/// use padzip::progress::NoProgress;
/// use padzip::rename::{RenameOptions, Renamer};
///
/// let source = MemorySource::new()
///     .with_directory("album/")
///     .with_file("album/7.jpg", b"seven")
///     .with_file("album/cover.jpg", b"cover");
///
/// let report = Renamer::new(source)
///     .with_options(RenameOptions::new().width(3)?)
///     .apply(MemorySink::new(), &mut NoProgress)?;
///
/// assert_eq!(report.stats.total_files, 2);
/// assert_eq!(report.stats.renamed_count, 1);
/// assert_eq!(report.stats.output_archive[0].0, "album/007.jpg");
/// # Ok::<(), padzip::Error>(())
/// ```
pub struct Renamer<S: ArchiveSource> {
    source: S,
    options: RenameOptions,
}

impl<S: ArchiveSource> Renamer<S> {
    /// Creates a renamer over `source` with default options.
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: RenameOptions::default(),
        }
    }

    /// Sets the rename options.
    pub fn with_options(mut self, options: RenameOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the rename options.
    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// Computes the outcome for one entry path without touching its content.
    pub fn plan_entry(&self, path: &ArchivePath) -> Result<(ArchivePath, EntryOutcome)> {
        let (dir, file_name) = path.split();

        let (new_name, status) = if self.options.applies_to(file_name) {
            pad_file_name(file_name, self.options.padding())
        } else {
            (file_name.to_string(), RenameStatus::Skipped)
        };

        let new_path = if status == RenameStatus::Renamed {
            path.with_file_name(&new_name)?
        } else {
            path.clone()
        };

        let outcome = EntryOutcome {
            original_name: file_name.to_string(),
            new_name,
            path: dir.to_string(),
            status,
        };
        Ok((new_path, outcome))
    }

    /// Processes every file entry and finalizes `sink`.
    ///
    /// The first error aborts the run; `sink` is dropped unfinished and no
    /// partial report is returned.
    pub fn apply<W, P>(mut self, mut sink: W, progress: &mut P) -> Result<RenameReport<W::Output>>
    where
        W: ArchiveSink,
        P: ProgressReporter + ?Sized,
    {
        let files = self.source.file_entries();
        let total_files = files.len();
        log::info!(
            "renaming {} file entries with padding width {}",
            total_files,
            self.options.padding()
        );

        progress.on_start(total_files);
        let mut tracker = EntryProgress::new(total_files);
        let mut outcomes = Vec::with_capacity(total_files);
        let mut written = HashSet::with_capacity(total_files);
        let mut renamed_count = 0;

        for entry in files {
            let path = ArchivePath::new(&entry.name)
                .map_err(|e| Error::read_entry(entry.name.as_str(), e))?;

            let data = self.source.read_entry(entry.index).inspect_err(|e| {
                log::warn!("aborting: {}", e);
            })?;

            let (new_path, outcome) = self.plan_entry(&path)?;

            if !written.insert(new_path.clone()) {
                log::warn!("aborting: '{}' maps to an existing output path", path);
                return Err(Error::NameCollision {
                    path: new_path.as_str().to_string(),
                });
            }

            sink.add_entry(&new_path, &data)?;

            if outcome.is_renamed() {
                renamed_count += 1;
                log::debug!("renamed '{}' -> '{}'", path, new_path);
            }

            progress.on_entry_complete(&outcome);
            outcomes.push(outcome);
            progress.on_progress(tracker.advance());
        }

        if total_files == 0 {
            progress.on_progress(tracker.percent());
        }

        let output_archive = sink.finish()?;
        log::info!("renamed {} of {} file entries", renamed_count, total_files);

        Ok(RenameReport {
            outcomes,
            stats: ProcessingStats {
                total_files,
                renamed_count,
                output_archive,
            },
        })
    }
}

/// Renames the entries of a ZIP archive held in memory.
///
/// Returns the per-entry outcomes, the counts and the rebuilt ZIP archive.
///
/// # Errors
///
/// - [`Error::CorruptArchive`] if `archive` is not a ZIP archive
/// - [`Error::ReadEntryFailed`] if an entry cannot be extracted
/// - [`Error::NameCollision`] if two entries map to the same output path
///
/// # Example
///
/// ```rust
/// use padzip::{RenameOptions, rename_archive};
/// use padzip::progress::NoProgress;
///
/// let err = rename_archive(b"PK? no", &RenameOptions::default(), &mut NoProgress).unwrap_err();
/// assert!(err.is_corrupt_archive());
/// ```
pub fn rename_archive<P>(archive: &[u8], options: &RenameOptions, progress: &mut P) -> Result<RenameReport>
where
    P: ProgressReporter + ?Sized,
{
    rename_archive_with(archive, options, SinkOptions::default(), progress)
}

/// Like [`rename_archive`], with explicit ZIP writer options.
pub fn rename_archive_with<P>(
    archive: &[u8],
    options: &RenameOptions,
    sink_options: SinkOptions,
    progress: &mut P,
) -> Result<RenameReport>
where
    P: ProgressReporter + ?Sized,
{
    let source = ZipSource::from_bytes(archive)?;
    let sink = ZipSink::with_options(sink_options)?;
    Renamer::new(source)
        .with_options(options.clone())
        .apply(sink, progress)
}
