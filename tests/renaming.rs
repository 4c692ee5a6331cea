//! End-to-end rename tests over real ZIP archives.

use padzip::archive::{ArchiveSink, ArchiveSource, SinkOptions, ZipSink, ZipSource};
use padzip::progress::RecordingProgress;
use padzip::{
    ArchivePath, Error, NoProgress, RenameOptions, RenameStatus, Renamer, StatisticsProgress,
    rename_archive, rename_archive_with,
};
use zip::CompressionMethod;

mod common;

use common::{
    corrupt_stored_data, create_zip, create_zip_with, read_zip, replace_bytes, zip_names,
};

fn width(w: u8) -> RenameOptions {
    RenameOptions::new().width(w).expect("valid width")
}

// =============================================================================
// Padding
// =============================================================================

#[test]
fn test_padding_examples() {
    let input = create_zip(&[
        ("7.jpg", b"seven" as &[u8]),
        ("42_photo.png", b"forty-two"),
        ("0042.png", b"already long"),
        ("photo.jpg", b"no digits"),
    ]);

    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();

    let rows: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| (o.original_name.as_str(), o.new_name.as_str(), o.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("7.jpg", "007.jpg", RenameStatus::Renamed),
            ("42_photo.png", "042_photo.png", RenameStatus::Renamed),
            ("0042.png", "0042.png", RenameStatus::Unchanged),
            ("photo.jpg", "photo.jpg", RenameStatus::Unchanged),
        ]
    );
    assert_eq!(report.stats.renamed_count, 2);
    assert_eq!(report.stats.total_files, 4);

    assert_eq!(
        zip_names(&report.stats.output_archive),
        vec!["007.jpg", "042_photo.png", "0042.png", "photo.jpg"]
    );
}

#[test]
fn test_width_one_leaves_everything() {
    let input = create_zip(&[("7.jpg", b"a" as &[u8]), ("12.jpg", b"b")]);
    let report = rename_archive(&input, &width(1), &mut NoProgress).unwrap();
    assert_eq!(report.stats.renamed_count, 0);
    assert_eq!(zip_names(&report.stats.output_archive), vec!["7.jpg", "12.jpg"]);
}

#[test]
fn test_width_ten() {
    let input = create_zip(&[("5.txt", b"x" as &[u8])]);
    let report = rename_archive(&input, &width(10), &mut NoProgress).unwrap();
    assert_eq!(report.outcomes[0].new_name, "0000000005.txt");
}

#[test]
fn test_name_that_is_only_digits() {
    let input = create_zip(&[("9", b"x" as &[u8])]);
    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();
    assert_eq!(zip_names(&report.stats.output_archive), vec!["009"]);
}

// =============================================================================
// Directories
// =============================================================================

#[test]
fn test_directory_portion_preserved() {
    let input = create_zip(&[
        ("album/", b"" as &[u8]),
        ("album/7.jpg", b"seven"),
        ("album/2024/1.jpg", b"one"),
    ]);

    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();

    assert_eq!(report.stats.total_files, 2);
    assert_eq!(report.outcomes[0].path, "album");
    assert_eq!(report.outcomes[0].new_path(), "album/007.jpg");
    // Only the base name is padded, never directory components
    assert_eq!(report.outcomes[1].path, "album/2024");
    assert_eq!(report.outcomes[1].new_path(), "album/2024/001.jpg");

    assert_eq!(
        zip_names(&report.stats.output_archive),
        vec!["album/007.jpg", "album/2024/001.jpg"]
    );
}

#[test]
fn test_directory_only_archive() {
    let input = create_zip(&[("a/", b"" as &[u8]), ("a/b/", b"")]);
    let mut progress = RecordingProgress::new();
    let report = rename_archive(&input, &width(3), &mut progress).unwrap();

    assert_eq!(report.stats.total_files, 0);
    assert!(report.outcomes.is_empty());
    assert!(read_zip(&report.stats.output_archive).is_empty());
    assert_eq!(progress.percents, vec![100]);
}

#[test]
fn test_backslash_directory_entry_is_not_a_file() {
    let input = create_zip(&[("album\\", b"" as &[u8]), ("album/7.jpg", b"seven")]);

    let source = ZipSource::from_bytes(&input).unwrap();
    assert!(source.entries()[0].is_directory);

    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();
    assert_eq!(report.stats.total_files, 1);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].original_path(), "album/7.jpg");
    assert_eq!(zip_names(&report.stats.output_archive), vec!["album/007.jpg"]);
}

#[test]
fn test_duplicate_source_names_collapse_on_read() {
    let mut input = create_zip(&[("a.txt", b"first" as &[u8]), ("b.txt", b"other")]);
    replace_bytes(&mut input, b"b.txt", b"a.txt");

    // The zip reader keeps one entry per name
    let source = ZipSource::from_bytes(&input).unwrap();
    assert_eq!(source.len(), 1);

    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();
    assert_eq!(report.stats.total_files, 1);
    assert_eq!(zip_names(&report.stats.output_archive), vec!["a.txt"]);
}

// =============================================================================
// Content
// =============================================================================

#[cfg(feature = "deflate")]
#[test]
fn test_deflated_input_round_trips() {
    let big = vec![b'z'; 64 * 1024];
    let input = create_zip_with(
        CompressionMethod::Deflated,
        &[("3.bin", big.as_slice()), ("notes.txt", b"hello")],
    )
    .unwrap();

    let report = rename_archive(&input, &width(2), &mut NoProgress).unwrap();
    let output = read_zip(&report.stats.output_archive);
    assert_eq!(output[0], ("03.bin".to_string(), big));
    assert_eq!(output[1], ("notes.txt".to_string(), b"hello".to_vec()));
}

#[test]
fn test_stored_output() {
    let input = create_zip(&[("1.txt", b"one" as &[u8])]);
    let report =
        rename_archive_with(&input, &width(3), SinkOptions::stored(), &mut NoProgress).unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(&report.stats.output_archive))
        .unwrap();
    let file = archive.by_index(0).unwrap();
    assert_eq!(file.name(), "001.txt");
    assert_eq!(file.compression(), CompressionMethod::Stored);
}

#[test]
fn test_empty_files_are_kept() {
    let input = create_zip(&[("4.txt", b"" as &[u8])]);
    let report = rename_archive(&input, &width(3), &mut NoProgress).unwrap();
    assert_eq!(
        read_zip(&report.stats.output_archive),
        vec![("004.txt".to_string(), Vec::new())]
    );
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn test_extension_filter() {
    let input = create_zip(&[
        ("1.JPG", b"a" as &[u8]),
        ("2.txt", b"b"),
        ("photo.jpg", b"c"),
    ]);
    let options = width(3).extension(".jpg");

    let report = rename_archive(&input, &options, &mut NoProgress).unwrap();
    assert_eq!(report.outcomes[0].status, RenameStatus::Renamed);
    assert_eq!(report.outcomes[1].status, RenameStatus::Skipped);
    assert_eq!(report.outcomes[2].status, RenameStatus::Unchanged);
    assert_eq!(
        zip_names(&report.stats.output_archive),
        vec!["001.JPG", "2.txt", "photo.jpg"]
    );
}

#[test]
fn test_invalid_width_rejected() {
    for w in [0u8, 11, 255] {
        let err = RenameOptions::new().width(w).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)), "width {}", w);
    }
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_not_an_archive() {
    let mut progress = RecordingProgress::new();
    let err = rename_archive(b"this is not a zip file", &width(3), &mut progress).unwrap_err();

    assert!(err.is_corrupt_archive());
    assert!(progress.percents.is_empty());
    assert_eq!(progress.total_files, None);
}

#[test]
fn test_empty_payload_is_corrupt() {
    let err = rename_archive(&[], &width(3), &mut NoProgress).unwrap_err();
    assert!(err.is_corrupt_archive());
}

#[test]
fn test_truncated_archive_is_corrupt() {
    let input = create_zip(&[("1.txt", b"one" as &[u8])]);
    let err = rename_archive(&input[..input.len() / 2], &width(3), &mut NoProgress).unwrap_err();
    assert!(err.is_corrupt_archive());
}

#[test]
fn test_damaged_entry_fails_run() {
    let mut input = create_zip(&[
        ("1.txt", b"first entry" as &[u8]),
        ("2.txt", b"DAMAGED-PAYLOAD"),
        ("3.txt", b"third entry"),
    ]);
    corrupt_stored_data(&mut input, b"DAMAGED-PAYLOAD");

    let mut progress = RecordingProgress::new();
    let err = rename_archive(&input, &width(3), &mut progress).unwrap_err();

    assert!(err.is_entry_failure());
    assert_eq!(err.entry_path(), Some("2.txt"));
    assert_eq!(progress.outcomes.len(), 1);
    assert_eq!(progress.percents, vec![33]);
}

#[test]
fn test_collision_fails_run() {
    let input = create_zip(&[("7.jpg", b"a" as &[u8]), ("007.jpg", b"b")]);
    let err = rename_archive(&input, &width(3), &mut NoProgress).unwrap_err();
    match err {
        Error::NameCollision { path } => assert_eq!(path, "007.jpg"),
        e => panic!("Expected NameCollision, got: {:?}", e),
    }
}

// =============================================================================
// Reader / writer pair
// =============================================================================

#[test]
fn test_zip_source_enumeration() {
    let input = create_zip(&[("d/", b"" as &[u8]), ("d/1.txt", b"x"), ("2.txt", b"y")]);
    let mut source = ZipSource::from_bytes(&input).unwrap();

    assert_eq!(source.len(), 3);
    assert!(source.entries()[0].is_directory);
    let files = source.file_entries();
    assert_eq!(files.len(), 2);
    assert_eq!(source.read_entry(files[1].index).unwrap(), b"y");
}

#[test]
fn test_zip_sink_then_rename() {
    let mut sink = ZipSink::new().unwrap();
    sink.add_entry(&ArchivePath::new("pics/8.png").unwrap(), b"eight")
        .unwrap();
    let archive = sink.finish().unwrap();

    let source = ZipSource::from_bytes(&archive).unwrap();
    let mut stats = StatisticsProgress::new();
    let report = Renamer::new(source)
        .with_options(width(4))
        .apply(ZipSink::new().unwrap(), &mut stats)
        .unwrap();

    assert_eq!(stats.state().entries_renamed, 1);
    assert_eq!(stats.state().percent, 100);
    assert_eq!(
        read_zip(&report.stats.output_archive),
        vec![("pics/0008.png".to_string(), b"eight".to_vec())]
    );
}

// =============================================================================
// Progress
// =============================================================================

#[test]
fn test_progress_with_closure() {
    let entries: Vec<(String, Vec<u8>)> = (1..=7)
        .map(|i| (format!("{}.jpg", i), vec![i as u8]))
        .collect();
    let refs: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(n, d)| (n.as_str(), d.as_slice()))
        .collect();
    let input = create_zip(&refs);

    let mut seen = Vec::new();
    let report = rename_archive(&input, &width(3), &mut |p: u8| seen.push(p)).unwrap();

    assert_eq!(report.stats.renamed_count, 7);
    assert_eq!(seen, vec![14, 29, 43, 57, 71, 86, 100]);
}
