//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading pathkit configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::Path;

/// File name of the per-user configuration, relative to the user
/// configuration directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".pathkit";

/// File name searched for in the working directory and its ancestors.
pub const PROJECT_CONFIG_FILE: &str = ".pathkit.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigSource;
/// use pathkit::Path;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: Path::new("~/.pathkit/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: Path,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::ConfigLoader;
/// use pathkit::Path;
///
/// let sources = ConfigLoader::load_all(&Path::current(), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.pathkit/config.yaml` (precedence 1)
    /// 2. The nearest `.pathkit.yaml` walking up from `working_dir`
    ///    (precedence 2)
    ///
    /// `user_dir` overrides the directory the user config is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// The default user configuration file, `~/.pathkit/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Path {
        Path::home() + USER_CONFIG_DIR + USER_CONFIG_FILE
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir + USER_CONFIG_FILE,
            None => Self::user_config_path(),
        };

        if !config_path.is_file() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest `.pathkit.yaml` in `start_dir` or its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.absolute().normalize();

        loop {
            let candidate = &current + PROJECT_CONFIG_FILE;
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            let parent = current.parent();
            if parent == current {
                return Ok(None);
            }
            current = parent;
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("Loading configuration from {path}");
        let contents = path.read_to_string()?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&contents).map_err(Error::from)
    }
}
