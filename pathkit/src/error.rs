//! Error types for the pathkit library.
//!
//! Pure path algebra never fails. Everything that asks the operating system
//! for something reports failures through [`Error`], using `thiserror` for
//! the `Display` and `source` plumbing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::Path;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Path, Result};
///
/// fn example_operation() -> Result<Path> {
///     Ok(Path::new("/usr/bin"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem call failed.
    ///
    /// Carries the underlying OS error so callers can inspect the error
    /// kind or raw OS code.
    #[error("{operation} failed for '{path}': {source}")]
    Filesystem {
        /// The operation that was attempted (e.g. `read`, `delete`).
        operation: &'static str,
        /// The path the operation was applied to.
        path: Path,
        /// The OS error.
        #[source]
        source: io::Error,
    },

    /// A path handed back by the OS could not be represented.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// A glob pattern could not be parsed.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Parser message, including the failing position.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::Filesystem`] for `path`.
    #[must_use]
    pub fn filesystem(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            operation,
            path: path.clone(),
            source,
        }
    }

    /// The underlying OS error, if this is a filesystem failure.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Error, Path};
    /// use std::io;
    ///
    /// let err = Error::filesystem(
    ///     "read",
    ///     &Path::new("/nonexistent"),
    ///     io::Error::from(io::ErrorKind::NotFound),
    /// );
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_display() {
        let err = Error::filesystem(
            "read",
            &Path::new("/tmp/missing"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = format!("{err}");
        assert!(display.contains("read failed"));
        assert!(display.contains("/tmp/missing"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_filesystem_error_source() {
        let err = Error::filesystem(
            "delete",
            &Path::new("/x"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_raw_os_error_preserved() {
        let err = Error::filesystem("write", &Path::new("/"), io::Error::from_raw_os_error(21));
        assert_eq!(err.io_error().and_then(io::Error::raw_os_error), Some(21));
    }

    #[test]
    fn test_invalid_pattern_error() {
        let err = Error::InvalidPattern {
            pattern: "[".to_string(),
            reason: "invalid range pattern at position 0".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid glob pattern"));
        assert!(display.contains('['));
        assert!(err.io_error().is_none());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "walk.max_depth".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("walk.max_depth"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "path is not valid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("UTF-8"));
    }
}
