//! The [`Path`] value type and its conversions.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A filesystem path held as a plain string.
///
/// `Path` never validates or normalizes what it is given: the string is
/// stored verbatim and every operation that changes it returns a new value.
/// Equality, ordering and hashing look at the string only, so `a/b` and
/// `a//b` are different paths until [`Path::normalize`] is applied.
///
/// The empty path (`""`) is a valid relative path distinct from `"."`.
///
/// # Examples
///
/// ```
/// use pathkit::Path;
///
/// let path = Path::new("/usr/bin/swift");
/// assert_eq!(path.to_string(), "/usr/bin/swift");
///
/// let literal: Path = "/usr/bin/swift".into();
/// assert_eq!(path, literal);
///
/// assert!(Path::new("a") < Path::new("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    raw: String,
}

impl Path {
    /// The platform path separator (`/` on Unix).
    pub const SEPARATOR: &'static str = std::path::MAIN_SEPARATOR_STR;

    /// Wrap a string verbatim.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The empty path, `""`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { raw: String::new() }
    }

    /// Join components with the separator.
    ///
    /// A leading component equal to the separator marks an absolute path and
    /// does not produce a doubled separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::from_components(["/usr", "bin", "swift"]), "/usr/bin/swift");
    /// assert_eq!(Path::from_components(["/", "usr", "bin"]), "/usr/bin");
    /// assert_eq!(Path::from_components(["/"]), "/");
    /// assert_eq!(Path::from_components(Vec::<String>::new()), "");
    /// ```
    #[must_use]
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = components.into_iter();
        let Some(first) = iter.next() else {
            return Self::empty();
        };

        let mut raw = first.as_ref().to_string();
        let mut needs_separator = raw != Self::SEPARATOR;
        for component in iter {
            if needs_separator {
                raw.push_str(Self::SEPARATOR);
            }
            raw.push_str(component.as_ref());
            needs_separator = true;
        }
        Self { raw }
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the path, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Borrow as a standard library path for `std::fs` calls.
    #[must_use]
    pub fn as_std_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.raw)
    }

    /// Whether this is the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&String> for Path {
    fn from(raw: &String) -> Self {
        Self::new(raw.as_str())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.raw
    }
}

impl From<Path> for PathBuf {
    fn from(path: Path) -> Self {
        PathBuf::from(path.raw)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl TryFrom<&std::path::Path> for Path {
    type Error = Error;

    fn try_from(path: &std::path::Path) -> Result<Self> {
        path.to_str().map(Self::new).ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        })
    }
}

impl TryFrom<PathBuf> for Path {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        path.into_os_string()
            .into_string()
            .map(Self::from)
            .map_err(|os| Error::InvalidPath {
                path: PathBuf::from(os),
                reason: "path is not valid UTF-8".to_string(),
            })
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        self.as_std_path()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl PartialEq<Path> for &str {
    fn eq(&self, other: &Path) -> bool {
        *self == other.raw
    }
}
