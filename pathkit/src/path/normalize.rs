//! Lexical normalization.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Resolving `.` and `..` components
//! - Collapsing redundant separators
//!
//! None of this touches the filesystem; symlinks are not resolved.

use super::components::{CURRENT, HOME, PARENT};
use super::Path;

/// Expand a leading `~` to the home directory.
///
/// Handles `~` and `~/path`. `~user` syntax is returned unchanged, as is
/// everything when the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute"), "/absolute");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix(HOME) else {
        return raw.to_string();
    };
    if !(rest.is_empty() || rest.starts_with(Path::SEPARATOR)) {
        return raw.to_string();
    }

    match home_string() {
        Some(home) => format!("{home}{rest}"),
        None => raw.to_string(),
    }
}

/// Resolve `.`, `..` and redundant separators in a path string.
///
/// `..` at the root of an absolute path is dropped; `..` that cannot be
/// cancelled in a relative path is kept. An empty relative result is `.`.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c"), "/a/c");
/// assert_eq!(resolve_components("/a/b/../../c"), "/c");
/// assert_eq!(resolve_components("/.."), "/");
/// assert_eq!(resolve_components("../a/../.."), "../..");
/// assert_eq!(resolve_components("a/.."), ".");
/// ```
#[must_use]
pub fn resolve_components(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let absolute = raw.starts_with(Path::SEPARATOR);
    let mut stack: Vec<&str> = Vec::new();

    for segment in raw.split(Path::SEPARATOR) {
        match segment {
            "" | CURRENT => {}
            PARENT => match stack.last() {
                Some(&last) if last != PARENT => {
                    stack.pop();
                }
                _ if absolute => {
                    // Already at root - can't go up further
                }
                _ => stack.push(PARENT),
            },
            _ => stack.push(segment),
        }
    }

    let joined = stack.join(Path::SEPARATOR);
    if absolute {
        format!("{}{joined}", Path::SEPARATOR)
    } else if joined.is_empty() {
        CURRENT.to_string()
    } else {
        joined
    }
}

/// The home directory as a string, without a trailing separator.
pub(crate) fn home_string() -> Option<String> {
    let home = home::home_dir()?;
    let home = home.to_str()?;
    let trimmed = home.trim_end_matches(Path::SEPARATOR);
    if trimmed.is_empty() {
        Some(Path::SEPARATOR.to_string())
    } else {
        Some(trimmed.to_string())
    }
}

impl Path {
    /// Lexically normalize the path.
    ///
    /// Expands a leading `~`, then resolves `.` and `..` and collapses
    /// redundant separators. Normalization is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("/usr/./local/../bin/swift").normalize(), "/usr/bin/swift");
    /// assert_eq!(Path::new("a//b/").normalize(), "a/b");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Path {
        Path::from(resolve_components(&expand_tilde(self.as_str())))
    }

    /// Whether the normalized path starts at the filesystem root.
    ///
    /// `~/...` counts as absolute whenever the home directory is known.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.normalize().as_str().starts_with(Path::SEPARATOR)
    }

    /// Negation of [`Path::is_absolute`].
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// The normalized absolute form of this path.
    ///
    /// Relative paths are resolved against [`Path::current`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("/usr/bin/swift").absolute(), "/usr/bin/swift");
    /// assert!(Path::new("swift").absolute().is_absolute());
    /// ```
    #[must_use]
    pub fn absolute(&self) -> Path {
        if self.is_absolute() {
            self.normalize()
        } else {
            (Path::current() + self).normalize()
        }
    }

    /// Replace a leading home directory with `~`.
    ///
    /// The prefix must end on a component boundary. Paths outside the home
    /// directory are returned unchanged, as is everything when the home
    /// directory is unknown or is the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let library = Path::home() + "Library";
    /// assert_eq!(library.abbreviate(), "~/Library");
    /// ```
    #[must_use]
    pub fn abbreviate(&self) -> Path {
        let Some(home) = home_string() else {
            return self.clone();
        };
        if home == Path::SEPARATOR {
            return self.clone();
        }

        match self.as_str().strip_prefix(home.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with(Path::SEPARATOR) => {
                Path::from(format!("{HOME}{rest}"))
            }
            _ => self.clone(),
        }
    }

    /// Whether both paths name the same location once made absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert!(Path::new("/usr").matches("/usr/bin/.."));
    /// assert!(!Path::new("/usr").matches("/bin"));
    /// ```
    #[must_use]
    pub fn matches(&self, other: impl Into<Path>) -> bool {
        self.absolute().normalize() == other.into().absolute().normalize()
    }
}
