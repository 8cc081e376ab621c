//! Well-known locations and the process working directory.
//!
//! The working directory is process-wide mutable state. Nothing here locks
//! it: callers changing it from several threads must serialize themselves.

use std::env;
use std::path::PathBuf;

use super::normalize::home_string;
use super::Path;
use crate::error::{Error, Result};

impl Path {
    /// The current working directory.
    ///
    /// Falls back to `.` (with a warning) if the working directory cannot be
    /// read, e.g. because it was deleted. Use [`Path::try_current`] to see
    /// the error instead.
    #[must_use]
    pub fn current() -> Path {
        Self::try_current().unwrap_or_else(|e| {
            log::warn!("Cannot read current directory, using '.': {e}");
            Path::new(".")
        })
    }

    /// The current working directory, or the error from `getcwd`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the working directory cannot be
    /// determined, or [`Error::InvalidPath`] if it is not valid UTF-8.
    pub fn try_current() -> Result<Path> {
        let cwd = env::current_dir()
            .map_err(|e| Error::filesystem("get current directory", &Path::new("."), e))?;
        Path::try_from(cwd)
    }

    /// Make this path the process working directory.
    ///
    /// This is an unscoped, unguarded change of global state with no
    /// internal locking. Prefer [`Path::chdir`] or [`Path::enter`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the directory cannot be entered.
    pub fn set_current(&self) -> Result<()> {
        log::debug!("Changing working directory to {self}");
        env::set_current_dir(self.as_std_path()).map_err(|e| Error::filesystem("chdir", self, e))
    }

    /// Run `scope` with this path as the working directory.
    ///
    /// The previous working directory is restored on every exit path,
    /// including when `scope` fails or panics, before the result reaches
    /// the caller. An error returned by `scope` is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error from `scope`, or a [`Error::Filesystem`] converted
    /// into `E` if the directory cannot be entered.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathkit::{Path, Result};
    ///
    /// let listing: Result<Vec<Path>> = Path::new("/usr/bin").chdir(|| {
    ///     Path::new(".").children()
    /// });
    /// ```
    pub fn chdir<T, E, F>(&self, scope: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let _guard = self.enter()?;
        scope()
    }

    /// Enter this directory, restoring the previous one when the returned
    /// guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the current directory cannot be read
    /// or this directory cannot be entered.
    pub fn enter(&self) -> Result<WorkingDirectoryGuard> {
        let previous = env::current_dir()
            .map_err(|e| Error::filesystem("get current directory", &Path::new("."), e))?;
        self.set_current()?;
        Ok(WorkingDirectoryGuard { previous })
    }

    /// The user's home directory.
    ///
    /// Falls back to `~` when the home directory cannot be determined, which
    /// keeps `Path::home() == Path::new("~").normalize()` true either way.
    #[must_use]
    pub fn home() -> Path {
        home_string().map_or_else(|| Path::new("~"), Path::from)
    }

    /// The system temporary directory.
    #[must_use]
    pub fn temporary() -> Path {
        let tmp = env::temp_dir();
        Path::new(tmp.to_string_lossy())
    }
}

/// Restores the saved working directory when dropped.
///
/// Created by [`Path::enter`].
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkingDirectoryGuard {
    previous: PathBuf,
}

impl WorkingDirectoryGuard {
    /// The directory that will be restored.
    #[must_use]
    pub fn previous(&self) -> &std::path::Path {
        &self.previous
    }
}

impl Drop for WorkingDirectoryGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            log::warn!(
                "Failed to restore working directory {}: {e}",
                self.previous.display()
            );
        }
    }
}
