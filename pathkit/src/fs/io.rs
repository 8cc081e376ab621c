//! Reading, writing and managing the file a path points at.

use std::fs;
use std::io::Write;

use crate::error::{Error, Result};
use crate::path::Path;

impl Path {
    /// Read the whole file as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the file does not exist or cannot be
    /// read.
    pub fn read(&self) -> Result<Vec<u8>> {
        log::debug!("Reading {self}");
        fs::read(self.as_std_path()).map_err(|e| Error::filesystem("read", self, e))
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the file does not exist, cannot be
    /// read, or is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        log::debug!("Reading {self} as text");
        fs::read_to_string(self.as_std_path()).map_err(|e| Error::filesystem("read", self, e))
    }

    /// Create or replace the file with `contents`.
    ///
    /// The data is written to a temporary file in the same directory and
    /// renamed over the destination, so readers see either the old or the
    /// new contents and an existing file is never left half-written. The
    /// permissions of a file being replaced are kept. A symlink at this path
    /// is replaced by the new file rather than followed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the directory is not writable or the
    /// destination is a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let file = Path::try_from(dir.path()).unwrap() + "greeting";
    /// file.write("Hi").unwrap();
    /// assert_eq!(file.read_to_string().unwrap(), "Hi");
    /// ```
    pub fn write(&self, contents: impl AsRef<[u8]>) -> Result<()> {
        log::debug!("Writing {self}");
        let directory = self.absolute().parent();

        let mut builder = tempfile::Builder::new();
        builder.prefix(".pathkit-");
        if let Some(permissions) = permissions_for(self) {
            builder.permissions(permissions);
        }

        let mut staged = builder
            .tempfile_in(directory.as_std_path())
            .map_err(|e| Error::filesystem("write", self, e))?;
        staged
            .write_all(contents.as_ref())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| Error::filesystem("write", self, e))?;
        staged
            .persist(self.as_std_path())
            .map_err(|e| Error::filesystem("write", self, e.error))?;
        Ok(())
    }

    /// Remove the file, symlink or empty directory at this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if nothing exists here, the directory
    /// is not empty, or permission is denied.
    pub fn delete(&self) -> Result<()> {
        log::debug!("Deleting {self}");
        let metadata = fs::symlink_metadata(self.as_std_path())
            .map_err(|e| Error::filesystem("delete", self, e))?;
        let removed = if metadata.is_dir() {
            fs::remove_dir(self.as_std_path())
        } else {
            fs::remove_file(self.as_std_path())
        };
        removed.map_err(|e| Error::filesystem("delete", self, e))
    }

    /// Create this directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the directory cannot be created.
    pub fn mkdir(&self) -> Result<()> {
        log::debug!("Creating directory {self}");
        fs::create_dir(self.as_std_path()).map_err(|e| Error::filesystem("mkdir", self, e))
    }

    /// Create this directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if any directory cannot be created.
    pub fn mkpath(&self) -> Result<()> {
        log::debug!("Creating directory path {self}");
        fs::create_dir_all(self.as_std_path()).map_err(|e| Error::filesystem("mkpath", self, e))
    }

    /// Copy this file to `destination`, returning the bytes copied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the copy fails.
    pub fn copy(&self, destination: &Path) -> Result<u64> {
        log::debug!("Copying {self} to {destination}");
        fs::copy(self.as_std_path(), destination.as_std_path())
            .map_err(|e| Error::filesystem("copy", self, e))
    }

    /// Move (rename) this entry to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the rename fails, e.g. across
    /// filesystems.
    pub fn move_to(&self, destination: &Path) -> Result<()> {
        log::debug!("Moving {self} to {destination}");
        fs::rename(self.as_std_path(), destination.as_std_path())
            .map_err(|e| Error::filesystem("move", self, e))
    }

    /// Create a hard link at `destination` referring to this file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the link cannot be created.
    pub fn link(&self, destination: &Path) -> Result<()> {
        log::debug!("Linking {destination} to {self}");
        fs::hard_link(self.as_std_path(), destination.as_std_path())
            .map_err(|e| Error::filesystem("link", destination, e))
    }

    /// Create a symlink at this path pointing to `destination`.
    ///
    /// `destination` is stored as given; a relative destination is
    /// interpreted by the OS relative to this link's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the link cannot be created.
    #[cfg(unix)]
    pub fn symlink(&self, destination: &Path) -> Result<()> {
        log::debug!("Symlinking {self} to {destination}");
        std::os::unix::fs::symlink(destination.as_std_path(), self.as_std_path())
            .map_err(|e| Error::filesystem("symlink", self, e))
    }
}

/// Permissions for a freshly written file.
///
/// Keeps those of an existing file; new files get the usual `0o666` before
/// the umask instead of the private mode temp files default to.
fn permissions_for(path: &Path) -> Option<fs::Permissions> {
    if let Ok(metadata) = fs::metadata(path.as_std_path()) {
        return Some(metadata.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o666))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
