//! The [`Path`] value and its algebra.
//!
//! # Key Concepts
//!
//! ## Components
//!
//! A path splits structurally on the separator. A leading separator and a
//! leading `~` each survive as their own first component, so the split is
//! lossless and [`Path::from_components`] reverses it.
//!
//! ## Appending
//!
//! `lhs + rhs` works on those components: `.` disappears, `..` cancels the
//! previous ordinary component (never the root), and an absolute or
//! home-anchored `rhs` replaces `lhs` entirely.
//!
//! ## Normalization
//!
//! [`Path::normalize`] expands `~` and resolves `.`/`..` lexically. It never
//! touches the filesystem, so symlinks are not followed.
//!
//! # Examples
//!
//! ```
//! use pathkit::Path;
//!
//! let base = Path::new("a/b/c");
//! assert_eq!(base.clone() + "../d/e", "a/b/d/e");
//! assert_eq!(Path::new("/") + "..", "/");
//!
//! let path = Path::new("/usr/./local/../bin/swift");
//! assert_eq!(path.normalize(), "/usr/bin/swift");
//! assert_eq!(path.normalize().last_component(), "swift");
//! ```

mod append;
mod components;
pub mod normalize;
mod special;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use special::WorkingDirectoryGuard;
pub use types::Path;
