//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(depth) = config.walk.as_ref().and_then(|w| w.max_depth) {
            if depth == 0 {
                return Err(Error::Validation {
                    field: "walk.max_depth".into(),
                    message: "Depth must be at least 1".into(),
                });
            }
        }

        Ok(())
    }
}
