//! Archive path type with directory / file name splitting.

use crate::{Error, Result};
use std::fmt;

/// Maximum length for archive paths (in bytes).
///
/// ZIP stores name lengths in a 16-bit field.
const MAX_PATH_LENGTH: usize = u16::MAX as usize;

/// A relative path of a file entry inside an archive.
///
/// Paths always use `/` as the directory separator. The last segment is the
/// file name, everything before the last `/` is the directory portion.
///
/// Paths are carried from one archive into another and never touch a file
/// system. Any name is accepted as long as:
/// - it is not empty
/// - it contains no NUL bytes
/// - it does not end with `/` (that would name a directory)
///
/// # Examples
///
/// ```
/// use padzip::ArchivePath;
///
/// let path = ArchivePath::new("album/7.jpg").unwrap();
/// assert_eq!(path.parent(), "album");
/// assert_eq!(path.file_name(), "7.jpg");
///
/// let renamed = path.with_file_name("007.jpg").unwrap();
/// assert_eq!(renamed.as_str(), "album/007.jpg");
///
/// assert!(ArchivePath::new("album/").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Creates a new `ArchivePath` from a string, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArchivePath`] if the path is empty, contains a
    /// NUL byte, is too long for an archive header, or ends with `/`.
    pub fn new(s: &str) -> Result<Self> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Builds a path from a directory portion and a file name.
    ///
    /// The separator is omitted when `dir` is empty.
    pub fn from_parts(dir: &str, file_name: &str) -> Result<Self> {
        if dir.is_empty() {
            Self::new(file_name)
        } else {
            Self::try_from(format!("{}/{}", dir, file_name))
        }
    }

    fn validate(s: &str) -> Result<()> {
        if s.is_empty() {
            return Err(Error::InvalidArchivePath("empty path".into()));
        }

        if s.contains('\0') {
            return Err(Error::InvalidArchivePath("contains NUL byte".into()));
        }

        if s.len() > MAX_PATH_LENGTH {
            return Err(Error::InvalidArchivePath(format!(
                "path exceeds maximum length of {} bytes",
                MAX_PATH_LENGTH
            )));
        }

        if s.ends_with('/') {
            return Err(Error::InvalidArchivePath(
                "trailing slash not allowed".into(),
            ));
        }

        Ok(())
    }

    /// Returns the path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the path on its last `/` into (directory portion, file name).
    ///
    /// The directory portion is empty for top-level entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use padzip::ArchivePath;
    ///
    /// let path = ArchivePath::new("a/b/c.txt").unwrap();
    /// assert_eq!(path.split(), ("a/b", "c.txt"));
    ///
    /// let path = ArchivePath::new("c.txt").unwrap();
    /// assert_eq!(path.split(), ("", "c.txt"));
    /// ```
    pub fn split(&self) -> (&str, &str) {
        match self.0.rfind('/') {
            Some(idx) => (&self.0[..idx], &self.0[idx + 1..]),
            None => ("", &self.0),
        }
    }

    /// Returns the directory portion of this path (empty for top-level entries).
    pub fn parent(&self) -> &str {
        self.split().0
    }

    /// Returns the file name (last segment) of this path.
    pub fn file_name(&self) -> &str {
        self.split().1
    }

    /// Returns a path in the same directory with a different file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting path would be invalid.
    pub fn with_file_name(&self, file_name: &str) -> Result<Self> {
        Self::from_parts(self.parent(), file_name)
    }

    /// Returns an iterator over the path components (segments).
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl AsRef<str> for ArchivePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ArchivePath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ArchivePath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}
