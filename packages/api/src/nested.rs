//! Method-style access to the navigator
//!
//! [`NestedExt`] exposes the path operations as methods on
//! `serde_json::Value`. The `nested_` prefix keeps them clear of inherent and
//! third-party methods. Every method forwards to the unbounded navigator with
//! `self` as the structure.

use nestpath_core::{PathResult, bury, deep_copy, delete, dig, dig_mut, path_exists};
use serde_json::Value;

/// Path operations callable directly on a structure
pub trait NestedExt {
    /// See [`nestpath_core::dig`]
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](nestpath_core::BadPath) when the path does not lead
    /// to a value.
    fn nested_dig<S: AsRef<str>>(&self, path: &[S]) -> PathResult<&Value>;

    /// See [`nestpath_core::dig_mut`]
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](nestpath_core::BadPath) when the path does not lead
    /// to a value.
    fn nested_dig_mut<S: AsRef<str>>(&mut self, path: &[S]) -> PathResult<&mut Value>;

    /// See [`nestpath_core::bury`]
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](nestpath_core::BadPath) for an empty path or a path
    /// that runs through a leaf.
    fn nested_bury<S: AsRef<str>, V: Into<Value>>(
        &mut self,
        path: &[S],
        value: V,
    ) -> PathResult<&mut Value>;

    /// See [`nestpath_core::delete`]
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](nestpath_core::BadPath) for an empty path or a path
    /// that does not lead to a value.
    fn nested_delete<S: AsRef<str>>(&mut self, path: &[S]) -> PathResult<Value>;

    /// See [`nestpath_core::path_exists`]
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](nestpath_core::BadPath) only for a non-integer
    /// segment applied to a sequence.
    fn nested_path_exists<S: AsRef<str>>(&self, path: &[S]) -> PathResult<bool>;

    /// See [`nestpath_core::deep_copy`]
    #[must_use]
    fn nested_deep_copy(&self) -> Value;
}

impl NestedExt for Value {
    fn nested_dig<S: AsRef<str>>(&self, path: &[S]) -> PathResult<&Value> {
        tracing::trace!(depth = path.len(), "nested_dig");
        dig(self, path)
    }

    fn nested_dig_mut<S: AsRef<str>>(&mut self, path: &[S]) -> PathResult<&mut Value> {
        tracing::trace!(depth = path.len(), "nested_dig_mut");
        dig_mut(self, path)
    }

    fn nested_bury<S: AsRef<str>, V: Into<Value>>(
        &mut self,
        path: &[S],
        value: V,
    ) -> PathResult<&mut Value> {
        tracing::debug!(depth = path.len(), "nested_bury");
        bury(self, path, value.into())
    }

    fn nested_delete<S: AsRef<str>>(&mut self, path: &[S]) -> PathResult<Value> {
        tracing::debug!(depth = path.len(), "nested_delete");
        delete(self, path)
    }

    fn nested_path_exists<S: AsRef<str>>(&self, path: &[S]) -> PathResult<bool> {
        tracing::trace!(depth = path.len(), "nested_path_exists");
        path_exists(self, path)
    }

    fn nested_deep_copy(&self) -> Value {
        deep_copy(self)
    }
}
