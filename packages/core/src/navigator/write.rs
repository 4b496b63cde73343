//! Write traversal: `bury`
//!
//! Absent intermediate positions are filled with new empty maps, never with
//! sequences, even when the next segment looks numeric.

use serde_json::{Map, Value};

use super::Navigator;
use super::resolution::{SequenceIndex, Slot, child_mut, resolve_segment};
use crate::error::{BadPath, PathResult};

impl Navigator {
    /// Set `value` at `path`, creating intermediate maps as needed
    ///
    /// Mutates `structure` in place and returns it. Writing to a sequence index
    /// equal to its length appends; writing further out pads the gap with
    /// `null` holes first.
    ///
    /// # Errors
    ///
    /// Returns [`BadPath`] if the path is empty, a non-final segment lands on an
    /// existing leaf, or a segment applied to a sequence is not a non-negative
    /// integer literal. Maps created before the failing segment are kept.
    pub fn bury<'v, S: AsRef<str>>(
        &self,
        structure: &'v mut Value,
        path: &[S],
        value: Value,
    ) -> PathResult<&'v mut Value> {
        if path.is_empty() {
            return Err(BadPath::empty_path(path));
        }
        self.check_depth(path)?;

        let last = path.len() - 1;
        let mut current = &mut *structure;
        for position in 0..last {
            let resolution = resolve_segment(current, path, position)?;
            if !resolution.exists {
                log::debug!(
                    "Creating map at segment {position} '{}'",
                    path[position].as_ref()
                );
                self.place(current, resolution.slot, Value::Object(Map::new()), path, position)?;
            }
            current = child_mut(current, resolution.slot)
                .ok_or_else(|| resolution.missing(path, position))?;
        }

        let resolution = resolve_segment(current, path, last)?;
        self.place(current, resolution.slot, value, path, last)?;

        Ok(structure)
    }

    /// Store `value` in `node` at `slot`, overwriting or extending as needed
    fn place<S: AsRef<str>>(
        &self,
        node: &mut Value,
        slot: Slot<'_>,
        value: Value,
        path: &[S],
        position: usize,
    ) -> PathResult<()> {
        match (node, slot) {
            (Value::Object(map), Slot::Key(key)) => {
                map.insert(key.to_owned(), value);
                Ok(())
            }
            (Value::Array(items), Slot::Index(SequenceIndex::At(index))) => {
                if let Some(existing) = items.get_mut(index) {
                    *existing = value;
                    return Ok(());
                }

                let holes = index - items.len();
                if let Some(max_hole_fill) = self.config.max_hole_fill {
                    if holes > max_hole_fill {
                        log::warn!(
                            "Refusing to insert {holes} holes at segment {position} (limit {max_hole_fill})"
                        );
                        return Err(BadPath::hole_limit(path, position, holes, max_hole_fill));
                    }
                }
                let reserved = holes
                    .checked_add(1)
                    .is_some_and(|additional| items.try_reserve(additional).is_ok());
                if !reserved {
                    log::warn!("Cannot grow sequence to index {index} at segment {position}");
                    return Err(BadPath::index_out_of_range(path, position, items.len()));
                }
                if holes > 0 {
                    log::debug!("Padding sequence with {holes} holes up to index {index}");
                }

                items.resize(index, Value::Null);
                items.push(value);
                Ok(())
            }
            (Value::Array(items), Slot::Index(SequenceIndex::Beyond)) => {
                Err(BadPath::index_out_of_range(path, position, items.len()))
            }
            _ => Err(BadPath::leaf_traversal(path, position)),
        }
    }
}
