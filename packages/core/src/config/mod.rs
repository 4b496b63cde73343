//! Navigator configuration
//!
//! Immutable settings consulted by [`Navigator`](crate::Navigator). The
//! defaults impose no limits, so a default navigator behaves exactly like the
//! free functions.

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Limits applied to every traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Longest path accepted by any operation. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Most `null` holes a single `bury` step may insert when writing past the
    /// end of a sequence. `None` means unbounded.
    pub max_hole_fill: Option<usize>,
}

impl NavigatorConfig {
    /// Configuration without any limits
    #[inline]
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_depth: None,
            max_hole_fill: None,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub const fn with_max_hole_fill(mut self, max_hole_fill: usize) -> Self {
        self.max_hole_fill = Some(max_hole_fill);
        self
    }

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` for malformed JSON or unknown fields,
    /// and any error reported by [`Validator::validate`].
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Validator for NavigatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_depth_limit(self.max_depth, "max_depth")?;
        ConfigValidator::validate_count_limit(self.max_hole_fill, "max_hole_fill")?;
        Ok(())
    }
}
