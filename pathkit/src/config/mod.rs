//! Configuration system for pathkit.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `.pathkit.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. The nearest `.pathkit.yaml` in the working directory or an ancestor
//! 5. User config (`~/.pathkit/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/path/to/project")
//!     .build()
//!     .unwrap();
//!
//! let walker = pathkit::Path::new("/path/to/project")
//!     .walk_with(config.walk_options())
//!     .unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{
    ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_DIR, USER_CONFIG_FILE,
};
pub use merger::ConfigMerger;
pub use schema::{Config, GlobConfig, OutputFormat, WalkConfig};
pub use validator::ConfigValidator;
