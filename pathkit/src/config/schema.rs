//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; the accessors on [`Config`] fill in the defaults.

use serde::{Deserialize, Serialize};

use crate::fs::{GlobOptions, WalkOptions};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, OutputFormat, WalkConfig};
///
/// let config = Config {
///     output: Some(OutputFormat::Json),
///     walk: Some(WalkConfig {
///         include_hidden: Some(false),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(!config.walk_options().include_hidden);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How the command-line tool prints results.
    pub output: Option<OutputFormat>,

    /// Directory walking defaults.
    pub walk: Option<WalkConfig>,

    /// Glob matching defaults.
    pub glob: Option<GlobConfig>,
}

/// Directory walking settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Visit entries whose name starts with `.`.
    pub include_hidden: Option<bool>,

    /// Descend into symlinked directories.
    pub follow_links: Option<bool>,

    /// Maximum depth below the walk root (at least 1).
    pub max_depth: Option<usize>,
}

/// Glob matching settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    /// Distinguish upper and lower case.
    pub case_sensitive: Option<bool>,

    /// Wildcards never match the separator.
    pub require_literal_separator: Option<bool>,

    /// Hidden names only match a literal leading `.`.
    pub require_literal_leading_dot: Option<bool>,
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use pathkit::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Plain);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Plain,
    /// A JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected plain or json)")),
        }
    }
}

impl Config {
    /// The configured output format, or [`OutputFormat::Plain`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Walk options with unset fields taken from [`WalkOptions::default`].
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        let defaults = WalkOptions::default();
        let Some(walk) = &self.walk else {
            return defaults;
        };
        WalkOptions {
            include_hidden: walk.include_hidden.unwrap_or(defaults.include_hidden),
            follow_links: walk.follow_links.unwrap_or(defaults.follow_links),
            max_depth: walk.max_depth.or(defaults.max_depth),
        }
    }

    /// Glob options with unset fields taken from [`GlobOptions::default`].
    #[must_use]
    pub fn glob_options(&self) -> GlobOptions {
        let defaults = GlobOptions::default();
        let Some(glob) = &self.glob else {
            return defaults;
        };
        GlobOptions {
            case_sensitive: glob.case_sensitive.unwrap_or(defaults.case_sensitive),
            require_literal_separator: glob
                .require_literal_separator
                .unwrap_or(defaults.require_literal_separator),
            require_literal_leading_dot: glob
                .require_literal_leading_dot
                .unwrap_or(defaults.require_literal_leading_dot),
        }
    }
}
