//! Fuzz target for the full rename pipeline with arbitrary byte input.
//!
//! Malformed ZIP data must surface as an error, never as a panic or hang.
//!
//! Run with: cargo +nightly fuzz run archive_open

#![no_main]

use libfuzzer_sys::fuzz_target;
use padzip::archive::{ArchiveSource, ZipSource};
use padzip::{NoProgress, RenameOptions, rename_archive};

fuzz_target!(|data: &[u8]| {
    // Enumerating and reading every entry exercises the reader on its own
    if let Ok(mut source) = ZipSource::from_bytes(data) {
        for entry in source.file_entries() {
            let _ = source.read_entry(entry.index);
        }
    }

    // A successful run must account for every file entry
    if let Ok(report) = rename_archive(data, &RenameOptions::default(), &mut NoProgress) {
        assert_eq!(report.outcomes.len(), report.stats.total_files);
        assert!(report.stats.renamed_count <= report.stats.total_files);
    }
});
