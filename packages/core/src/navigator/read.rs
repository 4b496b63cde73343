//! Read traversal: `dig`, `dig_mut` and `path_exists`

use serde_json::Value;

use super::Navigator;
use super::resolution::{child, child_mut, resolve_segment};
use super::shape::Shape;
use crate::error::PathResult;

impl Navigator {
    /// Return the value reachable by following `path` from `structure`
    ///
    /// An empty path returns `structure` itself, whatever its shape.
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`](crate::BadPath) if a leaf is reached with segments
    /// remaining, a key or index does not exist, or a segment applied to a
    /// sequence is not an integer literal.
    pub fn dig<'v, S: AsRef<str>>(&self, structure: &'v Value, path: &[S]) -> PathResult<&'v Value> {
        self.check_depth(path)?;

        let mut current = structure;
        for position in 0..path.len() {
            let resolution = resolve_segment(current, path, position)?;
            current = child(current, resolution.slot)
                .ok_or_else(|| resolution.missing(path, position))?;
        }
        Ok(current)
    }

    /// Mutable counterpart of [`Navigator::dig`]
    ///
    /// # Errors
    ///
    /// Same as [`Navigator::dig`].
    pub fn dig_mut<'v, S: AsRef<str>>(
        &self,
        structure: &'v mut Value,
        path: &[S],
    ) -> PathResult<&'v mut Value> {
        self.check_depth(path)?;

        let mut current = structure;
        for position in 0..path.len() {
            let resolution = resolve_segment(current, path, position)?;
            if !resolution.exists {
                return Err(resolution.missing(path, position));
            }
            current = child_mut(current, resolution.slot)
                .ok_or_else(|| resolution.missing(path, position))?;
        }
        Ok(current)
    }

    /// Test whether `path` names an existing value
    ///
    /// Missing keys, out-of-range indices and leaves with segments remaining
    /// all yield `false`. The empty path always exists.
    ///
    /// # Errors
    ///
    /// A segment applied to a sequence that is not an integer literal is a type
    /// error, not a miss, and fails with [`BadPath`](crate::BadPath). So does a
    /// path longer than the configured depth limit.
    pub fn path_exists<S: AsRef<str>>(&self, structure: &Value, path: &[S]) -> PathResult<bool> {
        self.check_depth(path)?;

        let mut current = structure;
        for position in 0..path.len() {
            if !Shape::of(current).is_container() {
                return Ok(false);
            }
            let resolution = resolve_segment(current, path, position)?;
            match child(current, resolution.slot) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(true)
    }
}
