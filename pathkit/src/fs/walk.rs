//! Directory listing and recursive traversal.

use std::fs;
use std::io;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::Path;

/// Options controlling a recursive walk.
///
/// # Examples
///
/// ```
/// use pathkit::WalkOptions;
///
/// let options = WalkOptions::default().with_max_depth(2).with_hidden(false);
/// assert_eq!(options.max_depth, Some(2));
/// assert!(!options.include_hidden);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Yield entries whose name starts with `.` (and descend into them).
    pub include_hidden: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
    /// Maximum depth below the root; `None` is unlimited.
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

impl WalkOptions {
    /// Set whether hidden entries are visited.
    #[must_use]
    pub const fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Set whether symlinked directories are followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Limit the walk to `depth` levels below the root.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Depth-first, name-sorted iterator over the descendants of a directory.
///
/// Each directory is yielded before its contents. Call
/// [`DirectoryWalker::skip_descendants`] right after a directory is yielded
/// to leave its contents out; siblings are unaffected.
///
/// # Examples
///
/// ```no_run
/// use pathkit::Path;
///
/// let mut walker = Path::new("/usr/share").walk().unwrap();
/// while let Some(entry) = walker.next() {
///     let entry = entry.unwrap();
///     if entry.last_component() == "doc" {
///         walker.skip_descendants();
///     }
/// }
/// ```
#[derive(Debug)]
pub struct DirectoryWalker {
    root: Path,
    inner: walkdir::IntoIter,
    include_hidden: bool,
    last_was_directory: bool,
}

impl DirectoryWalker {
    fn new(root: &Path, options: WalkOptions) -> Result<Self> {
        // Surface "not a directory" and permission errors up front.
        fs::read_dir(root.as_std_path()).map_err(|e| Error::filesystem("list directory", root, e))?;

        let mut walk = WalkDir::new(root.as_std_path())
            .min_depth(1)
            .follow_links(options.follow_links)
            .sort_by_file_name();
        if let Some(depth) = options.max_depth {
            walk = walk.max_depth(depth);
        }

        Ok(Self {
            root: root.clone(),
            inner: walk.into_iter(),
            include_hidden: options.include_hidden,
            last_was_directory: false,
        })
    }

    /// Do not descend into the entry that was just yielded.
    ///
    /// Has no effect if that entry was not a directory.
    pub fn skip_descendants(&mut self) {
        if self.last_was_directory {
            self.inner.skip_current_dir();
            self.last_was_directory = false;
        }
    }

    fn to_path(&self, entry: &walkdir::DirEntry) -> Result<Path> {
        let relative = entry
            .path()
            .strip_prefix(self.root.as_std_path())
            .map_err(|_| Error::InvalidPath {
                path: entry.path().to_path_buf(),
                reason: format!("entry is outside the walk root {}", self.root),
            })?;
        let relative = Path::try_from(relative)?;
        Ok(&self.root + &relative)
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.last_was_directory = false;
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .and_then(|p| Path::try_from(p).ok())
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(Error::filesystem("walk", &path, io::Error::from(e))));
                }
            };

            let is_directory = entry.file_type().is_dir();
            if !self.include_hidden && is_hidden(&entry) {
                if is_directory {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            self.last_was_directory = is_directory;
            return Some(self.to_path(&entry));
        }
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|n| n.starts_with('.'))
}

impl Path {
    /// The direct entries of this directory, sorted by name.
    ///
    /// Each entry is `self + name`. Hidden entries are included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if this is not a readable directory and
    /// [`Error::InvalidPath`] for entry names that are not UTF-8.
    pub fn children(&self) -> Result<Vec<Path>> {
        log::debug!("Listing {self}");
        let entries =
            fs::read_dir(self.as_std_path()).map_err(|e| Error::filesystem("list directory", self, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::filesystem("list directory", self, e))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| Error::InvalidPath {
                    path: entry.path(),
                    reason: format!("entry name {name:?} is not valid UTF-8"),
                })?;
            names.push(name);
        }
        names.sort();

        Ok(names.iter().map(|name| self + name).collect())
    }

    /// Walk every descendant of this directory with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if this is not a readable directory.
    pub fn walk(&self) -> Result<DirectoryWalker> {
        self.walk_with(WalkOptions::default())
    }

    /// Walk every descendant of this directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if this is not a readable directory.
    pub fn walk_with(&self, options: WalkOptions) -> Result<DirectoryWalker> {
        log::debug!("Walking {self} with {options:?}");
        DirectoryWalker::new(self, options)
    }

    /// All descendants of this directory in depth-first order.
    ///
    /// # Errors
    ///
    /// Returns the first error met while walking.
    pub fn recursive_children(&self) -> Result<Vec<Path>> {
        self.walk()?.collect()
    }
}
