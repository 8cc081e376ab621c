//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Output format override.
pub const OUTPUT_VAR: &str = "PATHKIT_OUTPUT";
/// `walk.include_hidden` override.
pub const INCLUDE_HIDDEN_VAR: &str = "PATHKIT_INCLUDE_HIDDEN";
/// `walk.follow_links` override.
pub const FOLLOW_LINKS_VAR: &str = "PATHKIT_FOLLOW_LINKS";
/// `walk.max_depth` override.
pub const MAX_DEPTH_VAR: &str = "PATHKIT_MAX_DEPTH";
/// `glob.case_sensitive` override.
pub const GLOB_CASE_SENSITIVE_VAR: &str = "PATHKIT_GLOB_CASE_SENSITIVE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHKIT_*` environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is invalid.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(OUTPUT_VAR) {
            let format = value.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: OUTPUT_VAR.into(),
                message,
            })?;
            config.output = Some(format);
        }

        if let Some(value) = lookup(INCLUDE_HIDDEN_VAR) {
            let walk = config.walk.get_or_insert_with(Default::default);
            walk.include_hidden = Some(Self::parse_bool(INCLUDE_HIDDEN_VAR, &value)?);
        }

        if let Some(value) = lookup(FOLLOW_LINKS_VAR) {
            let walk = config.walk.get_or_insert_with(Default::default);
            walk.follow_links = Some(Self::parse_bool(FOLLOW_LINKS_VAR, &value)?);
        }

        if let Some(value) = lookup(MAX_DEPTH_VAR) {
            let depth = value.trim().parse().map_err(|_| Error::Validation {
                field: MAX_DEPTH_VAR.into(),
                message: format!("Must be a positive integer, got '{value}'"),
            })?;
            let walk = config.walk.get_or_insert_with(Default::default);
            walk.max_depth = Some(depth);
        }

        if let Some(value) = lookup(GLOB_CASE_SENSITIVE_VAR) {
            let glob = config.glob.get_or_insert_with(Default::default);
            glob.case_sensitive = Some(Self::parse_bool(GLOB_CASE_SENSITIVE_VAR, &value)?);
        }

        Ok(())
    }

    /// Parse a boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        EnvironmentConfig::apply_from(&mut config, |name| vars.get(name).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_parse_bool_true_variants() {
        assert!(EnvironmentConfig::parse_bool("test", "true").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "TRUE").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "1").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "yes").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "On").unwrap());
    }

    #[test]
    fn test_parse_bool_false_variants() {
        assert!(!EnvironmentConfig::parse_bool("test", "false").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "0").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "NO").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "off").unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(result.is_err());
    }

    #[test]
    fn test_no_variables_leaves_config_untouched() {
        assert_eq!(apply(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_all_overrides() {
        let config = apply(&[
            (OUTPUT_VAR, "json"),
            (INCLUDE_HIDDEN_VAR, "no"),
            (FOLLOW_LINKS_VAR, "1"),
            (MAX_DEPTH_VAR, "4"),
            (GLOB_CASE_SENSITIVE_VAR, "false"),
        ])
        .unwrap();

        assert_eq!(config.output, Some(OutputFormat::Json));
        let walk = config.walk.unwrap();
        assert_eq!(walk.include_hidden, Some(false));
        assert_eq!(walk.follow_links, Some(true));
        assert_eq!(walk.max_depth, Some(4));
        assert_eq!(config.glob.unwrap().case_sensitive, Some(false));
    }

    #[test]
    fn test_override_keeps_other_fields() {
        let mut config = Config::default();
        config.walk = Some(crate::config::WalkConfig {
            include_hidden: Some(false),
            follow_links: None,
            max_depth: Some(2),
        });
        EnvironmentConfig::apply_from(&mut config, |name| {
            (name == FOLLOW_LINKS_VAR).then(|| "yes".to_string())
        })
        .unwrap();

        let walk = config.walk.unwrap();
        assert_eq!(walk.include_hidden, Some(false));
        assert_eq!(walk.follow_links, Some(true));
        assert_eq!(walk.max_depth, Some(2));
    }

    #[test]
    fn test_invalid_values() {
        let err = apply(&[(MAX_DEPTH_VAR, "deep")]).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == MAX_DEPTH_VAR));

        assert!(apply(&[(OUTPUT_VAR, "yaml")]).is_err());
        assert!(apply(&[(INCLUDE_HIDDEN_VAR, "sometimes")]).is_err());
    }
}
