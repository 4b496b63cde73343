//! Path Navigator
//!
//! Stateless traversal of `serde_json::Value` trees along string paths.
//! Maps take segments verbatim as keys; sequences take them as strict base-10
//! indices. Traversal is an explicit loop over the path, so path length does
//! not consume stack.
//!
//! The free functions at the bottom of this module use an unbounded
//! [`Navigator`]; construct one with a [`NavigatorConfig`] to impose limits.

use serde_json::Value;

use crate::config::{ConfigResult, NavigatorConfig, Validator};
use crate::error::{BadPath, PathResult};

mod read;
mod remove;
pub(crate) mod resolution;
pub mod shape;
mod write;

pub use shape::Shape;

/// Applies path operations under a fixed configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    config: NavigatorConfig,
}

static UNBOUNDED: Navigator = Navigator::unbounded();

impl Navigator {
    /// Navigator without depth or hole limits
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            config: NavigatorConfig::unbounded(),
        }
    }

    /// Create a navigator from validated configuration
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`](crate::ConfigurationError) reported
    /// by [`Validator::validate`].
    pub fn new(config: NavigatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Limits this navigator applies
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    fn check_depth<S: AsRef<str>>(&self, path: &[S]) -> PathResult<()> {
        match self.config.max_depth {
            Some(max_depth) if path.len() > max_depth => {
                log::warn!(
                    "Rejecting path of {} segments (limit {max_depth})",
                    path.len()
                );
                Err(BadPath::depth_limit(path, max_depth))
            }
            _ => Ok(()),
        }
    }
}

/// Return the value at `path`; see [`Navigator::dig`]
///
/// # Errors
///
/// Returns [`BadPath`] when the path does not lead to a value.
pub fn dig<'v, S: AsRef<str>>(structure: &'v Value, path: &[S]) -> PathResult<&'v Value> {
    UNBOUNDED.dig(structure, path)
}

/// Return a mutable reference to the value at `path`; see [`Navigator::dig_mut`]
///
/// # Errors
///
/// Returns [`BadPath`] when the path does not lead to a value.
pub fn dig_mut<'v, S: AsRef<str>>(structure: &'v mut Value, path: &[S]) -> PathResult<&'v mut Value> {
    UNBOUNDED.dig_mut(structure, path)
}

/// Set `value` at `path`; see [`Navigator::bury`]
///
/// # Errors
///
/// Returns [`BadPath`] for an empty path or a path that runs through a leaf.
pub fn bury<'v, S: AsRef<str>>(
    structure: &'v mut Value,
    path: &[S],
    value: Value,
) -> PathResult<&'v mut Value> {
    UNBOUNDED.bury(structure, path, value)
}

/// Remove and return the value at `path`; see [`Navigator::delete`]
///
/// # Errors
///
/// Returns [`BadPath`] for an empty path or a path that does not lead to a value.
pub fn delete<S: AsRef<str>>(structure: &mut Value, path: &[S]) -> PathResult<Value> {
    UNBOUNDED.delete(structure, path)
}

/// Test whether `path` names an existing value; see [`Navigator::path_exists`]
///
/// # Errors
///
/// Returns [`BadPath`] only for a non-integer segment applied to a sequence.
pub fn path_exists<S: AsRef<str>>(structure: &Value, path: &[S]) -> PathResult<bool> {
    UNBOUNDED.path_exists(structure, path)
}
