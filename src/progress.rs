//! Progress reporting for rename runs.
//!
//! The pipeline reports progress as an integer percentage of file entries
//! processed. Values within one run never decrease, and a successful run
//! always ends with exactly one report of 100. An archive without file
//! entries produces a single report of 100.
//!
//! Any `FnMut(u8)` closure is a [`ProgressReporter`]:
//!
//! ```rust
//! use padzip::{RenameOptions, rename_archive};
//! # let archive = padzip::archive::ZipSink::new().and_then(|s| padzip::archive::ArchiveSink::finish(s))?;
//!
//! let mut seen = Vec::new();
//! let report = rename_archive(&archive, &RenameOptions::default(), &mut |p: u8| seen.push(p))?;
//! assert_eq!(seen.last(), Some(&100));
//! # let _ = report;
//! # Ok::<(), padzip::Error>(())
//! ```

use std::time::{Duration, Instant};

use crate::rename::EntryOutcome;

/// IEC byte unit: 1 KiB = 1024 bytes.
pub const BYTES_KIB: u64 = 1024;
/// IEC byte unit: 1 MiB = 1024 KiB.
pub const BYTES_MIB: u64 = 1024 * BYTES_KIB;
/// IEC byte unit: 1 GiB = 1024 MiB.
pub const BYTES_GIB: u64 = 1024 * BYTES_MIB;

/// Progress reporting trait for rename runs.
///
/// All methods are called synchronously from the pipeline loop, in order.
pub trait ProgressReporter {
    /// Called once before the first entry with the number of file entries.
    fn on_start(&mut self, total_files: usize) {
        let _ = total_files;
    }

    /// Called after each file entry has been written.
    fn on_entry_complete(&mut self, outcome: &EntryOutcome) {
        let _ = outcome;
    }

    /// Called with the completion percentage (0-100).
    fn on_progress(&mut self, percent: u8) {
        let _ = percent;
    }
}

impl<F> ProgressReporter for F
where
    F: FnMut(u8),
{
    fn on_progress(&mut self, percent: u8) {
        self(percent)
    }
}

/// Converts processed/total entry counts into percentages.
///
/// Rounds half up: `round(100 * processed / total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryProgress {
    processed: usize,
    total: usize,
}

impl EntryProgress {
    /// Creates a tracker for `total` entries.
    pub fn new(total: usize) -> Self {
        Self { processed: 0, total }
    }

    /// Marks one more entry processed and returns the new percentage.
    pub fn advance(&mut self) -> u8 {
        self.processed = (self.processed + 1).min(self.total);
        self.percent()
    }

    /// Returns the current percentage; an empty run counts as complete.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let processed = self.processed as u128;
        let total = self.total as u128;
        ((200 * processed + total) / (2 * total)) as u8
    }

    /// Returns the number of entries processed.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Returns the total number of entries.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// A progress reporter that does nothing (null object pattern).
#[derive(Debug, Default, Clone)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {}

/// Progress state with timing.
#[derive(Debug, Clone)]
pub struct ProgressState {
    /// Total number of file entries.
    pub entries_total: usize,
    /// Number of file entries processed.
    pub entries_processed: usize,
    /// Number of entries renamed so far.
    pub entries_renamed: usize,
    /// Last reported percentage.
    pub percent: u8,
    /// Processing start time.
    pub start_time: Instant,
    /// Time of last update.
    pub last_update: Instant,
}

impl Default for ProgressState {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            entries_total: 0,
            entries_processed: 0,
            entries_renamed: 0,
            percent: 0,
            start_time: now,
            last_update: now,
        }
    }
}

impl ProgressState {
    /// Creates a new progress state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the processing rate in entries per second.
    pub fn entries_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed < 0.001 {
            0.0
        } else {
            self.entries_processed as f64 / elapsed
        }
    }

    /// Returns estimated time remaining.
    pub fn eta(&self) -> Option<Duration> {
        let rate = self.entries_per_second();
        if rate <= 0.0 || self.entries_processed >= self.entries_total {
            return None;
        }
        let remaining = (self.entries_total - self.entries_processed) as f64;
        Some(Duration::from_secs_f64(remaining / rate))
    }

    /// Formats the ETA as a human-readable string.
    pub fn format_eta(&self) -> String {
        match self.eta() {
            Some(duration) => format_duration(duration),
            None => "unknown".to_string(),
        }
    }
}

/// A progress reporter that collects statistics.
#[derive(Debug, Default, Clone)]
pub struct StatisticsProgress {
    /// The progress state.
    pub state: ProgressState,
}

impl StatisticsProgress {
    /// Creates a new statistics progress reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }
}

impl ProgressReporter for StatisticsProgress {
    fn on_start(&mut self, total_files: usize) {
        self.state.entries_total = total_files;
    }

    fn on_entry_complete(&mut self, outcome: &EntryOutcome) {
        self.state.entries_processed += 1;
        if outcome.is_renamed() {
            self.state.entries_renamed += 1;
        }
    }

    fn on_progress(&mut self, percent: u8) {
        self.state.percent = percent;
        self.state.last_update = Instant::now();
    }
}

/// A progress reporter that records every callback, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    /// Value passed to `on_start`, if it was called.
    pub total_files: Option<usize>,
    /// Every percentage reported.
    pub percents: Vec<u8>,
    /// Every outcome reported.
    pub outcomes: Vec<EntryOutcome>,
}

impl RecordingProgress {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the percentages never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.percents.windows(2).all(|w| w[0] <= w[1])
    }
}

impl ProgressReporter for RecordingProgress {
    fn on_start(&mut self, total_files: usize) {
        self.total_files = Some(total_files);
    }

    fn on_entry_complete(&mut self, outcome: &EntryOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn on_progress(&mut self, percent: u8) {
        self.percents.push(percent);
    }
}

/// Formats a duration as a human-readable string.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Formats bytes as a human-readable string using IEC units (KiB, MiB, GiB).
///
/// # Examples
///
/// ```rust
/// use padzip::progress::format_bytes_iec;
///
/// assert_eq!(format_bytes_iec(0), "0 B");
/// assert_eq!(format_bytes_iec(1024), "1.0 KiB");
/// assert_eq!(format_bytes_iec(1536), "1.5 KiB");
/// assert_eq!(format_bytes_iec(1048576), "1.0 MiB");
/// ```
pub fn format_bytes_iec(bytes: u64) -> String {
    let bytes_f64 = bytes as f64;
    if bytes < BYTES_KIB {
        format!("{} B", bytes)
    } else if bytes < BYTES_MIB {
        format!("{:.1} KiB", bytes_f64 / BYTES_KIB as f64)
    } else if bytes < BYTES_GIB {
        format!("{:.1} MiB", bytes_f64 / BYTES_MIB as f64)
    } else {
        format!("{:.1} GiB", bytes_f64 / BYTES_GIB as f64)
    }
}
