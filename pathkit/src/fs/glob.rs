//! Shell-style pattern matching against the filesystem.

use crate::error::{Error, Result};
use crate::path::Path;

/// Matching rules for [`Path::glob_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobOptions {
    /// Distinguish upper and lower case.
    pub case_sensitive: bool,
    /// `*`, `?` and ranges never match the separator.
    pub require_literal_separator: bool,
    /// A leading `.` in a component must be matched literally.
    pub require_literal_leading_dot: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        }
    }
}

impl From<GlobOptions> for glob::MatchOptions {
    fn from(options: GlobOptions) -> Self {
        let mut match_options = glob::MatchOptions::new();
        match_options.case_sensitive = options.case_sensitive;
        match_options.require_literal_separator = options.require_literal_separator;
        match_options.require_literal_leading_dot = options.require_literal_leading_dot;
        match_options
    }
}

impl Path {
    /// Every existing path matching `pattern`, absolute and sorted.
    ///
    /// A relative pattern is matched from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathkit::Path;
    ///
    /// for binary in Path::glob("/usr/bin/py*").unwrap() {
    ///     println!("{binary}");
    /// }
    /// ```
    pub fn glob(pattern: &str) -> Result<Vec<Path>> {
        Self::glob_with(pattern, GlobOptions::default())
    }

    /// [`Path::glob`] with explicit matching rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` cannot be parsed.
    pub fn glob_with(pattern: &str, options: GlobOptions) -> Result<Vec<Path>> {
        log::debug!("Globbing {pattern} with {options:?}");
        let entries = glob::glob_with(pattern, options.into()).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: format!("{} at position {}", e.msg, e.pos),
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            let found = match entry {
                Ok(found) => found,
                Err(e) => {
                    log::debug!("Skipping unreadable glob entry {}: {}", e.path().display(), e.error());
                    continue;
                }
            };
            match Path::try_from(found) {
                Ok(path) => matches.push(path.absolute()),
                Err(e) => log::debug!("Skipping glob match: {e}"),
            }
        }
        matches.sort();
        Ok(matches)
    }

    /// Match `pattern` relative to this directory.
    ///
    /// Equivalent to `Path::glob((self + pattern).as_str())`, so an absolute
    /// `pattern` ignores `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the joined pattern cannot be
    /// parsed.
    pub fn glob_in(&self, pattern: &str) -> Result<Vec<Path>> {
        Self::glob((self + pattern).as_str())
    }
}
