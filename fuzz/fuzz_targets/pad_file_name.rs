//! Fuzz target for the padding rule with arbitrary file names.
//!
//! Run with: cargo +nightly fuzz run pad_file_name
//!
//! Properties checked:
//! - Only ASCII zeros are ever added, and only at the front
//! - Names are never shortened
//! - Padding twice is the same as padding once

#![no_main]

use libfuzzer_sys::fuzz_target;
use padzip::rename::{PaddingWidth, RenameStatus, pad_file_name};

fuzz_target!(|input: (u8, &str)| {
    let (width, name) = input;
    let width = PaddingWidth::clamped(width);

    let (padded, status) = pad_file_name(name, width);
    assert!(padded.ends_with(name));

    let added = padded.len() - name.len();
    assert!(padded[..added].bytes().all(|b| b == b'0'));
    assert_eq!(status == RenameStatus::Renamed, added > 0);

    let (again, status) = pad_file_name(&padded, width);
    assert_eq!(again, padded);
    assert_ne!(status, RenameStatus::Renamed);
});
