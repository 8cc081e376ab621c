//! Assembling the layered configuration.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::Path;

/// Precedence given to files passed through [`ConfigBuilder::with_file`].
const EXPLICIT_FILE_PRECEDENCE: u8 = 3;

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output: Some(OutputFormat::Json),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<Path>,
    user_dir: Option<Path>,
    files: Vec<Path>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not discover the user or project configuration files.
    ///
    /// Files added with [`ConfigBuilder::with_file`] are still read.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHKIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Start project file discovery from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<Path>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Read the user configuration from `dir/config.yaml` instead of
    /// `~/.pathkit/config.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl Into<Path>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Layer an explicit file above the discovered ones.
    ///
    /// Unlike discovered files, a missing explicit file is an error.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Path>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Layer `config` above everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate every layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = if self.skip_files {
            Vec::new()
        } else {
            let working_dir = self.working_dir.unwrap_or_else(Path::current);
            ConfigLoader::load_all(&working_dir, self.user_dir.as_ref())?
        };

        for path in self.files {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: EXPLICIT_FILE_PRECEDENCE,
                config,
            });
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("Resolved configuration: {config:?}");
        Ok(config)
    }
}
