//! Delete traversal

use serde_json::Value;

use super::Navigator;
use super::resolution::{SequenceIndex, Slot, child_mut, resolve_segment};
use crate::error::{BadPath, PathResult};

impl Navigator {
    /// Remove and return the value at `path`
    ///
    /// Removing from a sequence shifts later elements left by one.
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`] if the path is empty, any level lacks the key or
    /// index, a leaf is reached with segments remaining, or a segment applied
    /// to a sequence is not an integer literal. Nothing is removed on error.
    pub fn delete<S: AsRef<str>>(&self, structure: &mut Value, path: &[S]) -> PathResult<Value> {
        if path.is_empty() {
            return Err(BadPath::empty_path(path));
        }
        self.check_depth(path)?;

        let last = path.len() - 1;
        let mut current = structure;
        for position in 0..last {
            let resolution = resolve_segment(current, path, position)?;
            if !resolution.exists {
                return Err(resolution.missing(path, position));
            }
            current = child_mut(current, resolution.slot)
                .ok_or_else(|| resolution.missing(path, position))?;
        }

        let resolution = resolve_segment(current, path, last)?;
        if !resolution.exists {
            return Err(resolution.missing(path, last));
        }

        let removed = match (current, resolution.slot) {
            (Value::Object(map), Slot::Key(key)) => map.remove(key),
            (Value::Array(items), Slot::Index(SequenceIndex::At(index))) => {
                Some(items.remove(index))
            }
            _ => None,
        };

        let removed = removed.ok_or_else(|| resolution.missing(path, last))?;
        log::debug!("Deleted value at segment {last} '{}'", path[last].as_ref());
        Ok(removed)
    }
}
