//! The leading-digit padding rule.

use super::options::PaddingWidth;
use super::outcome::RenameStatus;

/// Splits a file name into its leading ASCII digit run and the remainder.
///
/// Returns `None` when the name does not start with a digit.
///
/// # Examples
///
/// ```
/// use padzip::rename::split_leading_digits;
///
/// assert_eq!(split_leading_digits("42_photo.png"), Some(("42", "_photo.png")));
/// assert_eq!(split_leading_digits("123"), Some(("123", "")));
/// assert_eq!(split_leading_digits("photo.jpg"), None);
/// ```
pub fn split_leading_digits(name: &str) -> Option<(&str, &str)> {
    let end = name
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(name.len());
    if end == 0 {
        None
    } else {
        Some(name.split_at(end))
    }
}

/// Applies the padding rule to a base file name.
///
/// The leading digit run is left-padded with `'0'` up to `width` digits.
/// Runs that already have `width` or more digits are never shortened, so
/// the result is `(name, Unchanged)` for them and for names without a
/// leading digit.
///
/// # Examples
///
/// ```
/// use padzip::rename::{pad_file_name, PaddingWidth, RenameStatus};
///
/// let width = PaddingWidth::new(3).unwrap();
/// assert_eq!(pad_file_name("7.jpg", width), ("007.jpg".to_string(), RenameStatus::Renamed));
/// assert_eq!(pad_file_name("0042.png", width), ("0042.png".to_string(), RenameStatus::Unchanged));
/// assert_eq!(pad_file_name("photo.jpg", width), ("photo.jpg".to_string(), RenameStatus::Unchanged));
/// ```
pub fn pad_file_name(name: &str, width: PaddingWidth) -> (String, RenameStatus) {
    let Some((digits, rest)) = split_leading_digits(name) else {
        return (name.to_string(), RenameStatus::Unchanged);
    };

    let width = width.get() as usize;
    if digits.len() >= width {
        return (name.to_string(), RenameStatus::Unchanged);
    }

    let mut padded = String::with_capacity(width + rest.len());
    padded.extend(std::iter::repeat_n('0', width - digits.len()));
    padded.push_str(digits);
    padded.push_str(rest);

    if padded == name {
        (padded, RenameStatus::Unchanged)
    } else {
        (padded, RenameStatus::Renamed)
    }
}
