//! Per-entry outcomes and aggregate statistics of a rename run.

use std::fmt;

/// What happened to one file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameStatus {
    /// The file name changed.
    Renamed,
    /// The padding rule did not apply or produced the same name.
    Unchanged,
    /// The file was excluded by the extension filter and copied as is.
    Skipped,
}

impl RenameStatus {
    /// Returns the status as a lowercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            RenameStatus::Renamed => "renamed",
            RenameStatus::Unchanged => "unchanged",
            RenameStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome for one file entry.
///
/// `new_name` differs from `original_name` exactly when `status` is
/// [`RenameStatus::Renamed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Base file name before the rule was applied.
    pub original_name: String,
    /// Base file name after the rule was applied.
    pub new_name: String,
    /// Directory portion of the entry path, empty for top-level entries.
    pub path: String,
    /// What happened to the entry.
    pub status: RenameStatus,
}

impl EntryOutcome {
    /// Returns `true` if the entry was renamed.
    pub fn is_renamed(&self) -> bool {
        self.status == RenameStatus::Renamed
    }

    /// Returns the full path of the entry in the source archive.
    pub fn original_path(&self) -> String {
        join(&self.path, &self.original_name)
    }

    /// Returns the full path of the entry in the rebuilt archive.
    pub fn new_path(&self) -> String {
        join(&self.path, &self.new_name)
    }
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Aggregate statistics for one run, including the rebuilt archive.
///
/// `A` is the sink's output; for ZIP runs this is the archive bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats<A = Vec<u8>> {
    /// Number of file entries processed (directories excluded).
    pub total_files: usize,
    /// Number of entries whose name changed.
    pub renamed_count: usize,
    /// The finalized output archive.
    pub output_archive: A,
}

impl<A> ProcessingStats<A> {
    /// Number of entries copied under their original name.
    pub fn unchanged_count(&self) -> usize {
        self.total_files - self.renamed_count
    }
}

/// Result of a successful rename run.
#[must_use = "rename report carries the rebuilt archive"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport<A = Vec<u8>> {
    /// One outcome per file entry, in archive order.
    pub outcomes: Vec<EntryOutcome>,
    /// Aggregate counts and the rebuilt archive.
    pub stats: ProcessingStats<A>,
}

impl<A> RenameReport<A> {
    /// Returns only the outcomes of renamed entries.
    pub fn renamed(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.is_renamed())
    }

    /// Returns the number of outcomes with the given status.
    pub fn count(&self, status: RenameStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Splits the report into outcomes and the output archive.
    pub fn into_parts(self) -> (Vec<EntryOutcome>, ProcessingStats<A>) {
        (self.outcomes, self.stats)
    }
}
