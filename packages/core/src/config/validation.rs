//! Configuration validation
//!
//! Validation trait and error type shared by navigator settings.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid depth limit: {0}")]
    InvalidDepthLimit(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidDepthLimit` - if a depth limit is present but zero
    /// - `InvalidParameter` - if another parameter is outside its valid range
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an optional upper bound on path length
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidDepthLimit` if the limit is `Some(0)`;
    /// such a navigator could not accept any non-empty path.
    pub fn validate_depth_limit(limit: Option<usize>, name: &str) -> ConfigResult<()> {
        if limit == Some(0) {
            return Err(ConfigurationError::InvalidDepthLimit(format!(
                "{name} must be greater than zero when set"
            )));
        }
        Ok(())
    }

    /// Validate an optional count limit that may legitimately be zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the limit does not fit
    /// in an `isize`, which is the most a `Vec` can ever hold.
    pub fn validate_count_limit(limit: Option<usize>, name: &str) -> ConfigResult<()> {
        match limit {
            Some(value) if isize::try_from(value).is_err() => Err(
                ConfigurationError::InvalidParameter(format!("{name} cannot exceed isize::MAX")),
            ),
            _ => Ok(()),
        }
    }
}
