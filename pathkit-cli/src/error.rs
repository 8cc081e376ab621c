//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pathkit::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., paths do not match) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., `matches` found no match)
    /// - 4: Invalid arguments
    /// - 5: I/O error, including failed filesystem calls in the library
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) | CliError::Library(LibError::Filesystem { .. }) => 5,
            CliError::Library(LibError::InvalidPattern { .. }) => 4,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Configuration(_) | LibError::Validation { .. } => {
                CliError::Config(e.to_string())
            }
            _ => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathkit::Path;
    use std::io;

    fn filesystem_error() -> LibError {
        LibError::filesystem(
            "read",
            &Path::new("/missing"),
            io::Error::from(io::ErrorKind::NotFound),
        )
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("no".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("bad".into()).exit_code(), 4);
        assert_eq!(CliError::Io(io::Error::other("disk")).exit_code(), 5);
        assert_eq!(CliError::from(filesystem_error()).exit_code(), 5);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);

        let invalid_path = LibError::InvalidPath {
            path: "/x".into(),
            reason: "not UTF-8".into(),
        };
        assert_eq!(CliError::from(invalid_path).exit_code(), 6);

        let pattern = LibError::InvalidPattern {
            pattern: "[".into(),
            reason: "unclosed".into(),
        };
        assert_eq!(CliError::from(pattern).exit_code(), 4);
    }

    #[test]
    fn test_validation_errors_become_config_errors() {
        let err = CliError::from(LibError::Validation {
            field: "walk.max_depth".into(),
            message: "Depth must be at least 1".into(),
        });
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(filesystem_error());
        assert!(err.to_string().starts_with("read failed for '/missing'"));
    }
}
