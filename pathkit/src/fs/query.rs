//! Boolean filesystem queries and symlink resolution.
//!
//! Queries never fail: anything the OS cannot answer (including a missing
//! path) reports `false`.

use std::fs;

use crate::error::{Error, Result};
use crate::path::Path;

impl Path {
    /// Whether something exists at this path, following symlinks.
    ///
    /// A dangling symlink does not exist.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self.as_std_path()).is_ok()
    }

    /// Whether this path is a directory, following symlinks.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        fs::metadata(self.as_std_path()).is_ok_and(|m| m.is_dir())
    }

    /// Whether this path is a regular file, following symlinks.
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self.as_std_path()).is_ok_and(|m| m.is_file())
    }

    /// Whether this path is itself a symlink.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        fs::symlink_metadata(self.as_std_path()).is_ok_and(|m| m.file_type().is_symlink())
    }

    /// Whether the current user may execute (or search) this path.
    #[must_use]
    pub fn is_executable(&self) -> bool {
        access::check(self.as_std_path(), access::Mode::Execute)
    }

    /// Whether the current user may read this path.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        access::check(self.as_std_path(), access::Mode::Read)
    }

    /// Whether the current user may write this path.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        access::check(self.as_std_path(), access::Mode::Write)
    }

    /// Whether the current user may delete this path.
    ///
    /// Deleting needs write and search access to the parent directory. When
    /// the parent has the sticky bit set, the user must also own the entry
    /// or the directory (or be root).
    #[must_use]
    pub fn is_deletable(&self) -> bool {
        let Ok(entry) = fs::symlink_metadata(self.as_std_path()) else {
            return false;
        };
        let parent = self.absolute().parent();
        let Ok(directory) = fs::metadata(parent.as_std_path()) else {
            return false;
        };
        if !access::check(parent.as_std_path(), access::Mode::WriteSearch) {
            return false;
        }
        access::sticky_allows(&directory, &entry)
    }

    /// The destination of this symlink.
    ///
    /// A relative link target is resolved against the link's parent
    /// directory (lexically, so the result may still contain `..`); an
    /// absolute target is returned verbatim. A leading `~` in a target is
    /// an ordinary name, as the OS reads it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if this path is not a symlink or cannot
    /// be read, and [`Error::InvalidPath`] if the target is not UTF-8.
    pub fn symlink_destination(&self) -> Result<Path> {
        let target = fs::read_link(self.as_std_path())
            .map_err(|e| Error::filesystem("read symlink", self, e))?;
        let destination = Path::try_from(target)?;

        log::debug!("Symlink {self} points to {destination}");
        if destination.as_str().starts_with(Path::SEPARATOR) {
            Ok(destination)
        } else {
            Ok(join_link_target(&self.parent(), &destination))
        }
    }

    /// The parent directory, `self + ".."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("/usr/bin").parent(), "/usr");
    /// assert_eq!(Path::new("/").parent(), "/");
    /// assert_eq!(Path::new("a").parent(), ".");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Path {
        self + ".."
    }
}

/// Join a relative link target to the link's directory.
///
/// The OS never expands `~` in a link target, so a target such as `~/x`
/// names a directory called `~` and must not replace `directory`.
fn join_link_target(directory: &Path, target: &Path) -> Path {
    let joined = directory + format!("./{target}").as_str();
    if joined.component_slices().first() == Some(&"~") {
        Path::from(format!("./{joined}"))
    } else {
        joined
    }
}

#[cfg(unix)]
mod access {
    use std::fs::Metadata;
    use std::os::unix::fs::MetadataExt;
    use std::path::Path;

    use nix::unistd::{self, AccessFlags, Uid};

    const STICKY_BIT: u32 = 0o1000;

    #[derive(Debug, Clone, Copy)]
    pub(super) enum Mode {
        Read,
        Write,
        Execute,
        WriteSearch,
    }

    impl Mode {
        fn flags(self) -> AccessFlags {
            match self {
                Self::Read => AccessFlags::R_OK,
                Self::Write => AccessFlags::W_OK,
                Self::Execute => AccessFlags::X_OK,
                Self::WriteSearch => AccessFlags::W_OK | AccessFlags::X_OK,
            }
        }
    }

    pub(super) fn check(path: &Path, mode: Mode) -> bool {
        unistd::access(path, mode.flags()).is_ok()
    }

    pub(super) fn sticky_allows(directory: &Metadata, entry: &Metadata) -> bool {
        if directory.mode() & STICKY_BIT == 0 {
            return true;
        }
        let euid = Uid::effective();
        euid.is_root() || euid.as_raw() == entry.uid() || euid.as_raw() == directory.uid()
    }
}

#[cfg(not(unix))]
mod access {
    use std::fs::{self, Metadata};
    use std::path::Path;

    #[derive(Debug, Clone, Copy)]
    pub(super) enum Mode {
        Read,
        Write,
        Execute,
        WriteSearch,
    }

    pub(super) fn check(path: &Path, mode: Mode) -> bool {
        let Ok(metadata) = fs::metadata(path) else {
            return false;
        };
        match mode {
            Mode::Read => true,
            Mode::Write | Mode::WriteSearch => !metadata.permissions().readonly(),
            Mode::Execute => metadata.is_dir(),
        }
    }

    pub(super) fn sticky_allows(_directory: &Metadata, _entry: &Metadata) -> bool {
        true
    }
}
