//! Shared test utilities for integration tests.
//!
//! Archives are built and inspected with the `zip` crate directly, so the
//! tests do not depend on padzip's own writer to check its output.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Creates an in-memory ZIP archive with the given compression method.
///
/// Names ending in `/` or `\` are added as directory entries.
pub fn create_zip_with(
    method: CompressionMethod,
    entries: &[(&str, &[u8])],
) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(method);

    for (name, data) in entries {
        if name.ends_with(['/', '\\']) {
            writer.add_directory(*name, options)?;
        } else {
            writer.start_file(*name, options)?;
            writer.write_all(data)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Creates an in-memory ZIP archive with stored (uncompressed) entries.
///
/// # Example
///
/// ```ignore
/// let bytes = create_zip(&[("album/", b""), ("album/7.jpg", b"seven")]);
/// ```
pub fn create_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    create_zip_with(CompressionMethod::Stored, entries).expect("Failed to create test archive")
}

/// Reads every entry of a ZIP archive in order, as `(name, data)` pairs.
pub fn read_zip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("Failed to open output archive");
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).expect("Failed to read entry");
        let mut data = Vec::new();
        file.read_to_end(&mut data).expect("Failed to read entry data");
        entries.push((file.name().to_string(), data));
    }
    entries
}

/// Returns the entry names of a ZIP archive in order.
pub fn zip_names(bytes: &[u8]) -> Vec<String> {
    read_zip(bytes).into_iter().map(|(name, _)| name).collect()
}

/// Flips the first byte of `needle` inside a stored archive.
///
/// The entry still enumerates but fails its CRC check when read.
pub fn corrupt_stored_data(archive: &mut [u8], needle: &[u8]) {
    let pos = archive
        .windows(needle.len())
        .position(|w| w == needle)
        .expect("Needle not found in archive");
    archive[pos] ^= 0xFF;
}

/// Replaces every occurrence of `from` with `to` (same length) in an archive.
///
/// Applied to an entry name this rewrites both the local header and the
/// central directory record.
pub fn replace_bytes(archive: &mut [u8], from: &[u8], to: &[u8]) {
    assert_eq!(from.len(), to.len(), "replacement must keep the length");
    let mut pos = 0;
    while let Some(offset) = archive[pos..].windows(from.len()).position(|w| w == from) {
        let start = pos + offset;
        archive[start..start + to.len()].copy_from_slice(to);
        pos = start + to.len();
    }
}
