//! Property-based tests using proptest.
//!
//! These tests verify invariants of the rename pipeline using randomly
//! generated archives.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

use padzip::archive::{MemorySink, MemorySource};
use padzip::progress::RecordingProgress;
use padzip::rename::{pad_file_name, split_leading_digits};
use padzip::{NoProgress, PaddingWidth, RenameOptions, RenameStatus, Renamer, rename_archive};

mod common;

const DIRECTORIES: &[&str] = &["", "album", "album/2024", "x"];

/// Strategy for generating archive file entries with distinct output names.
///
/// Keys are unique numbers; numbered names start with the number and
/// unnumbered ones with a letter, so padding can never merge two entries.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    proptest::collection::btree_map(
        1u32..100_000,
        (
            any::<bool>(),
            0..DIRECTORIES.len(),
            "[a-z_]{0,6}",
            proptest::collection::vec(any::<u8>(), 0..64),
        ),
        0..16,
    )
    .prop_map(|map: BTreeMap<_, _>| {
        map.into_iter()
            .map(|(key, (numbered, dir, stem, data))| {
                let name = if numbered {
                    format!("{}{}.bin", key, stem)
                } else {
                    format!("n{}{}.bin", key, stem)
                };
                let path = if DIRECTORIES[dir].is_empty() {
                    name
                } else {
                    format!("{}/{}", DIRECTORIES[dir], name)
                };
                (path, data)
            })
            .collect()
    })
}

fn to_zip(entries: &[(String, Vec<u8>)]) -> Vec<u8> {
    let refs: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(n, d)| (n.as_str(), d.as_slice()))
        .collect();
    common::create_zip(&refs)
}

proptest! {
    /// Padding is a fixed point: a second run renames nothing.
    #[test]
    fn rerun_is_idempotent(entries in entries_strategy(), width in 1u8..=10) {
        let options = RenameOptions::new().width(width).unwrap();
        let first = rename_archive(&to_zip(&entries), &options, &mut NoProgress).unwrap();
        let second = rename_archive(&first.stats.output_archive, &options, &mut NoProgress).unwrap();

        prop_assert_eq!(second.stats.renamed_count, 0);
        prop_assert!(second.outcomes.iter().all(|o| o.status == RenameStatus::Unchanged));
        prop_assert_eq!(second.stats.total_files, first.stats.total_files);
    }

    /// Every file keeps its exact bytes under its new name.
    #[test]
    fn content_survives_rename(entries in entries_strategy(), width in 1u8..=10) {
        let options = RenameOptions::new().width(width).unwrap();
        let report = rename_archive(&to_zip(&entries), &options, &mut NoProgress).unwrap();

        let original: HashMap<_, _> = entries.iter().cloned().collect();
        let output: HashMap<_, _> = common::read_zip(&report.stats.output_archive)
            .into_iter()
            .collect();

        prop_assert_eq!(output.len(), entries.len());
        for outcome in &report.outcomes {
            prop_assert_eq!(
                output.get(&outcome.new_path()),
                original.get(&outcome.original_path())
            );
        }
    }

    /// Counts always agree with the outcome list.
    #[test]
    fn aggregate_counts_are_consistent(entries in entries_strategy(), width in 1u8..=10) {
        let source = MemorySource::from_files(entries.clone());
        let report = Renamer::new(source)
            .with_options(RenameOptions::new().width(width).unwrap())
            .apply(MemorySink::new(), &mut NoProgress)
            .unwrap();

        prop_assert_eq!(report.stats.total_files, report.outcomes.len());
        prop_assert_eq!(report.stats.total_files, entries.len());
        prop_assert_eq!(report.stats.renamed_count, report.count(RenameStatus::Renamed));
        for outcome in &report.outcomes {
            prop_assert_eq!(outcome.is_renamed(), outcome.original_name != outcome.new_name);
        }
    }

    /// Progress never goes backwards and ends at exactly 100.
    #[test]
    fn progress_is_monotonic(entries in entries_strategy()) {
        let source = MemorySource::from_files(entries.clone());
        let mut progress = RecordingProgress::new();
        let _ = Renamer::new(source)
            .apply(MemorySink::new(), &mut progress)
            .unwrap();

        prop_assert!(progress.is_monotonic());
        prop_assert_eq!(progress.percents.last(), Some(&100));
        prop_assert_eq!(progress.percents.iter().filter(|&&p| p == 100).count(), 1);
        prop_assert_eq!(progress.percents.len(), entries.len().max(1));
    }

    /// Padding only prepends zeros to the digit run.
    #[test]
    fn padding_prepends_zeros_only(
        digits in "[0-9]{1,12}",
        rest in "[a-zA-Z_.]{0,8}",
        width in 1u8..=10,
    ) {
        let name = format!("{}{}", digits, rest);
        let (new_name, status) = pad_file_name(&name, PaddingWidth::new(width).unwrap());

        let added = new_name.len() - name.len();
        prop_assert!(new_name[..added].bytes().all(|b| b == b'0'));
        prop_assert_eq!(&new_name[added..], name.as_str());

        let (run, _) = split_leading_digits(&new_name).unwrap();
        prop_assert!(run.len() >= usize::from(width));
        prop_assert_eq!(status == RenameStatus::Renamed, added > 0);
        prop_assert_eq!(added, usize::from(width).saturating_sub(digits.len()));
    }

    /// Names without a leading digit are never touched.
    #[test]
    fn names_without_digits_unchanged(name in "[a-zA-Z_][a-zA-Z0-9_.]{0,12}", width in 1u8..=10) {
        let (new_name, status) = pad_file_name(&name, PaddingWidth::new(width).unwrap());
        prop_assert_eq!(new_name, name);
        prop_assert_eq!(status, RenameStatus::Unchanged);
    }
}
