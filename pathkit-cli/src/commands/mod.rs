//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`, `absolute`, `abbreviate`: rewrite paths lexically
//! - `components`, `parent`, `join`: take paths apart and put them together
//! - `info`: describe a path and its filesystem state
//! - `readlink`: resolve a symlink
//! - `ls`: list a directory
//! - `walk`: recursively list a directory
//! - `glob`: match a shell pattern
//! - `matches`: compare two paths
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod components;
pub mod glob;
pub mod info;
pub mod ls;
pub mod matches;
pub mod normalize;
pub mod readlink;
pub mod walk;

pub use completions::CompletionsCommand;
pub use components::{ComponentsCommand, JoinCommand, ParentCommand};
pub use glob::GlobCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use matches::MatchesCommand;
pub use normalize::{AbbreviateCommand, AbsoluteCommand, NormalizeCommand};
pub use readlink::ReadlinkCommand;
pub use walk::WalkCommand;
