//! Output formatting for CLI operations.

use padzip::EntryOutcome;
use padzip::archive::EntryInfo;
use padzip::progress::{format_bytes_iec, format_duration};
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;

/// Everything a formatter needs to describe one rename run
pub struct RunSummary<'a> {
    pub archive: &'a Path,
    pub outcomes: &'a [EntryOutcome],
    pub total_files: usize,
    pub renamed_count: usize,
    pub width: u8,
    /// Written archive and its size; `None` for dry runs
    pub output: Option<(&'a Path, u64)>,
    pub preview: usize,
    pub elapsed: Duration,
}

impl RunSummary<'_> {
    fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == padzip::RenameStatus::Skipped)
            .count()
    }
}

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats the entries of an archive
    fn format_list(&self, entries: &[EntryInfo]) -> String;

    /// Formats the result of a rename run
    fn format_rename(&self, summary: &RunSummary<'_>) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_list(&self, entries: &[EntryInfo]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{:>6} {}\n", "Index", "Name"));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        let mut file_count = 0;
        let mut dir_count = 0;

        for entry in entries {
            if entry.is_directory {
                dir_count += 1;
            } else {
                file_count += 1;
            }
            let type_indicator = if entry.is_directory { " D" } else { "" };
            output.push_str(&format!(
                "{:>6} {}{}\n",
                entry.index, entry.name, type_indicator
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{} files, {} directories\n",
            file_count, dir_count
        ));

        output
    }

    fn format_rename(&self, summary: &RunSummary<'_>) -> String {
        let mut output = String::new();

        if !summary.outcomes.is_empty() && summary.preview > 0 {
            output.push_str(&format!(
                "{:<32} {:<32} {:<24} {}\n",
                "Original", "New", "Path", "Status"
            ));
            output.push_str(&"-".repeat(100));
            output.push('\n');

            for outcome in summary.outcomes.iter().take(summary.preview) {
                let path = if outcome.path.is_empty() {
                    "/"
                } else {
                    outcome.path.as_str()
                };
                output.push_str(&format!(
                    "{:<32} {:<32} {:<24} {}\n",
                    outcome.original_name, outcome.new_name, path, outcome.status
                ));
            }

            let hidden = summary.outcomes.len().saturating_sub(summary.preview);
            if hidden > 0 {
                output.push_str(&format!("... and {} more\n", hidden));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "Renamed {} of {} files (width {})",
            summary.renamed_count, summary.total_files, summary.width
        ));
        let skipped = summary.skipped_count();
        if skipped > 0 {
            output.push_str(&format!(", {} skipped", skipped));
        }
        output.push_str(&format!(" in {}\n", format_duration(summary.elapsed)));

        match summary.output {
            Some((path, size)) => output.push_str(&format!(
                "Wrote {} ({})\n",
                path.display(),
                format_bytes_iec(size)
            )),
            None => output.push_str("Dry run, no archive written\n"),
        }

        output
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_list(&self, entries: &[EntryInfo]) -> String {
        let items: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "index": e.index,
                    "name": e.name,
                    "is_directory": e.is_directory,
                })
            })
            .collect();

        serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_rename(&self, summary: &RunSummary<'_>) -> String {
        serde_json::to_string_pretty(&manifest(summary)).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Builds the manifest document of a rename run.
///
/// The manifest always lists every outcome; `preview` only limits the
/// human-readable table.
pub fn manifest(summary: &RunSummary<'_>) -> Value {
    json!({
        "archive": summary.archive.display().to_string(),
        "width": summary.width,
        "total_files": summary.total_files,
        "renamed_count": summary.renamed_count,
        "skipped_count": summary.skipped_count(),
        "output": summary.output.map(|(path, _)| path.display().to_string()),
        "output_size": summary.output.map(|(_, size)| size),
        "dry_run": summary.output.is_none(),
        "outcomes": summary.outcomes.iter().map(|o| json!({
            "original_name": o.original_name,
            "new_name": o.new_name,
            "path": o.path,
            "status": o.status.as_str(),
        })).collect::<Vec<_>>(),
    })
}

/// Creates the appropriate formatter based on output format
pub fn create_formatter(format: super::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        super::OutputFormat::Human => Box::new(HumanFormatter),
        super::OutputFormat::Json => Box::new(JsonFormatter),
    }
}
