//! Run configuration for the rename pipeline.

use std::fmt;

use crate::{Error, Result};

/// A validated padding width: the minimum number of digits a leading
/// numeric prefix is padded to.
///
/// Valid widths are `1..=10`; the default is 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaddingWidth(u8);

impl PaddingWidth {
    /// Smallest accepted width.
    pub const MIN: u8 = 1;
    /// Largest accepted width.
    pub const MAX: u8 = 10;
    /// Width used when none is configured.
    pub const DEFAULT: u8 = 3;

    /// Creates a padding width, rejecting values outside `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for out-of-range values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padzip::rename::PaddingWidth;
    ///
    /// assert_eq!(PaddingWidth::new(4).unwrap().get(), 4);
    /// assert!(PaddingWidth::new(0).is_err());
    /// assert!(PaddingWidth::new(11).is_err());
    /// ```
    pub fn new(width: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&width) {
            return Err(Error::InvalidConfiguration(format!(
                "padding width {} is outside {}..={}",
                width,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(width))
    }

    /// Creates a padding width, clamping the value into `1..=10`.
    ///
    /// Use [`new`](Self::new) instead if invalid values should be reported.
    pub fn clamped(width: u8) -> Self {
        Self(width.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the width as a number.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PaddingWidth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for PaddingWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PaddingWidth {
    type Error = Error;

    fn try_from(width: u8) -> Result<Self> {
        Self::new(width)
    }
}

/// Options for a rename run.
///
/// # Example
///
/// ```rust
/// use padzip::rename::RenameOptions;
///
/// let options = RenameOptions::new().width(4)?.extension(".jpg");
/// assert_eq!(options.padding().get(), 4);
/// assert!(options.applies_to("7.JPG"));
/// assert!(!options.applies_to("7.png"));
/// # Ok::<(), padzip::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOptions {
    width: PaddingWidth,
    extension: Option<String>,
}

impl RenameOptions {
    /// Creates options with the default width and no extension filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the padding width, rejecting values outside `1..=10`.
    pub fn width(mut self, width: u8) -> Result<Self> {
        self.width = PaddingWidth::new(width)?;
        Ok(self)
    }

    /// Sets an already validated padding width.
    pub fn padding_width(mut self, width: PaddingWidth) -> Self {
        self.width = width;
        self
    }

    /// Restricts renaming to file names ending with `suffix`.
    ///
    /// The comparison ignores ASCII case. Files that do not match are copied
    /// unchanged and reported as skipped. An empty suffix removes the filter.
    pub fn extension(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.extension = if suffix.is_empty() { None } else { Some(suffix) };
        self
    }

    /// Returns the configured padding width.
    pub fn padding(&self) -> PaddingWidth {
        self.width
    }

    /// Returns the extension filter, if any.
    pub fn extension_filter(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Returns whether the padding rule applies to `file_name`.
    pub fn applies_to(&self, file_name: &str) -> bool {
        match &self.extension {
            None => true,
            Some(suffix) => ends_with_ignore_ascii_case(file_name, suffix),
        }
    }
}

fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bounds() {
        assert!(PaddingWidth::new(1).is_ok());
        assert!(PaddingWidth::new(10).is_ok());
        let err = PaddingWidth::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(PaddingWidth::try_from(200).is_err());
    }

    #[test]
    fn test_width_clamped() {
        assert_eq!(PaddingWidth::clamped(0).get(), 1);
        assert_eq!(PaddingWidth::clamped(7).get(), 7);
        assert_eq!(PaddingWidth::clamped(42).get(), 10);
    }

    #[test]
    fn test_default_width_is_three() {
        assert_eq!(PaddingWidth::default().get(), 3);
        assert_eq!(RenameOptions::default().padding().to_string(), "3");
    }

    #[test]
    fn test_rejected_width_keeps_error() {
        assert!(RenameOptions::new().width(11).is_err());
    }

    #[test]
    fn test_no_filter_applies_everywhere() {
        let options = RenameOptions::new();
        assert!(options.applies_to("7.jpg"));
        assert!(options.applies_to("README"));
    }

    #[test]
    fn test_extension_filter_case_insensitive() {
        let options = RenameOptions::new().extension(".Jpg");
        assert_eq!(options.extension_filter(), Some(".Jpg"));
        assert!(options.applies_to("1.JPG"));
        assert!(options.applies_to("1.jpg"));
        assert!(!options.applies_to("1.jpeg"));
        assert!(!options.applies_to("jpg"));
    }

    #[test]
    fn test_empty_extension_clears_filter() {
        let options = RenameOptions::new().extension(".png").extension("");
        assert!(options.extension_filter().is_none());
    }

    #[test]
    fn test_multibyte_name_with_filter() {
        let options = RenameOptions::new().extension(".jpg");
        assert!(options.applies_to("ảnh.jpg"));
        assert!(!options.applies_to("é"));
    }
}
