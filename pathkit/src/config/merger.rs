//! Configuration merging and precedence handling.
//!
//! Layers are merged field by field: a value set in a higher layer wins,
//! an unset value falls through to the layer below.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GlobConfig, WalkConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output: Some(OutputFormat::Plain), ..Default::default() };
/// let high = Config { output: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output.is_some() {
            target.output = source.output;
        }

        if let Some(ref source_walk) = source.walk {
            target.walk = Some(match &target.walk {
                Some(target_walk) => Self::merge_walk(target_walk, source_walk),
                None => source_walk.clone(),
            });
        }

        if let Some(ref source_glob) = source.glob {
            target.glob = Some(match &target.glob {
                Some(target_glob) => Self::merge_glob(target_glob, source_glob),
                None => source_glob.clone(),
            });
        }
    }

    fn merge_walk(target: &WalkConfig, source: &WalkConfig) -> WalkConfig {
        WalkConfig {
            include_hidden: source.include_hidden.or(target.include_hidden),
            follow_links: source.follow_links.or(target.follow_links),
            max_depth: source.max_depth.or(target.max_depth),
        }
    }

    fn merge_glob(target: &GlobConfig, source: &GlobConfig) -> GlobConfig {
        GlobConfig {
            case_sensitive: source.case_sensitive.or(target.case_sensitive),
            require_literal_separator: source
                .require_literal_separator
                .or(target.require_literal_separator),
            require_literal_leading_dot: source
                .require_literal_leading_dot
                .or(target.require_literal_leading_dot),
        }
    }
}
