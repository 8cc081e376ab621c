//! Filesystem operations on [`Path`](crate::Path).
//!
//! These are thin wrappers over the OS: boolean queries (`exists`,
//! `is_directory`, permission checks), symlink resolution, directory
//! listing and walking, glob matching, and whole-file I/O. All of them are
//! inherent methods on `Path`; this module only adds the option and
//! iterator types they use.
//!
//! Queries answer `false` when the OS cannot answer. Everything else
//! returns [`Result`](crate::Result) with the OS error attached.

mod glob;
mod io;
mod query;
mod walk;

pub use self::glob::GlobOptions;
pub use walk::{DirectoryWalker, WalkOptions};
