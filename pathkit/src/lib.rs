#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A string-backed path value with a lexical algebra, plus thin helpers
//! for asking the filesystem about it.
//!
//! The algebra (components, appending with `+`, normalization, tilde
//! expansion and abbreviation) never touches the disk and never fails.
//! Filesystem helpers are inherent methods on the same [`Path`] value and
//! report OS failures through [`Error`].
//!
//! ## Core Types
//!
//! - [`Path`]: the path value
//! - [`DirectoryWalker`], [`WalkOptions`] and [`GlobOptions`]: traversal
//! - [`Error`] and [`Result`]: error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::Path;
//!
//! let bin = Path::new("/usr/local") + "../bin";
//! assert_eq!(bin, "/usr/bin");
//! assert_eq!((bin + "swift").components(), ["/", "usr", "bin", "swift"]);
//!
//! assert_eq!(Path::new("a/./b/../c").normalize(), "a/c");
//! assert_eq!(Path::new("~").normalize(), Path::home());
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use fs::{DirectoryWalker, GlobOptions, WalkOptions};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Path, WorkingDirectoryGuard};
