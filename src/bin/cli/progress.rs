//! Progress bar implementation for CLI operations.

use indicatif::{ProgressBar, ProgressStyle};
use padzip::EntryOutcome;
use padzip::progress::{ProgressReporter, ProgressState, StatisticsProgress};

/// Percentage bar driven by the rename pipeline
pub struct CliProgress {
    bar: ProgressBar,
    stats: StatisticsProgress,
    quiet: bool,
}

impl CliProgress {
    /// Creates a new progress display
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(100);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            pb.set_style(style);
            pb
        };

        Self {
            bar,
            stats: StatisticsProgress::new(),
            quiet,
        }
    }

    /// Sets a message on the progress bar
    pub fn set_message(&self, msg: impl Into<String>) {
        if !self.quiet {
            self.bar.set_message(msg.into());
        }
    }

    /// Returns the counters collected so far
    pub fn state(&self) -> &ProgressState {
        self.stats.state()
    }

    /// Clears the bar once the run succeeded
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Leaves the bar in place with an error marker
    pub fn abandon(&self) {
        self.bar.abandon_with_message("Error");
    }
}

impl ProgressReporter for CliProgress {
    fn on_start(&mut self, total_files: usize) {
        self.stats.on_start(total_files);
        self.set_message(format!("{} files", total_files));
    }

    fn on_entry_complete(&mut self, outcome: &EntryOutcome) {
        self.stats.on_entry_complete(outcome);
        if self.quiet {
            return;
        }

        let message = entry_message(outcome.new_path(), self.stats.state());
        self.bar.set_message(message);
    }

    fn on_progress(&mut self, percent: u8) {
        self.stats.on_progress(percent);
        self.bar.set_position(u64::from(percent));
    }
}

/// Formats the bar message for a finished entry: its (shortened) path and
/// the estimated time left.
fn entry_message(name: String, state: &ProgressState) -> String {
    // Truncate long names
    let display_name = match name.char_indices().rev().nth(36) {
        Some((idx, _)) if name.chars().count() > 40 => format!("...{}", &name[idx..]),
        _ => name,
    };
    format!("{} (ETA {})", display_name, state.format_eta())
}
