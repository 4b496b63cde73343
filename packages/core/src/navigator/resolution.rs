//! Segment resolution
//!
//! How one path segment applies to one level of a structure. Every operation
//! goes through [`resolve_segment`], so all of them agree on what a valid,
//! invalid or existing segment is.

use serde_json::Value;

use super::shape::Shape;
use crate::error::{BadPath, PathResult};

/// A sequence index parsed from a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceIndex {
    At(usize),
    /// A well-formed literal too large for `usize`; no sequence reaches it
    Beyond,
}

/// Where a segment points within the current node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot<'p> {
    Key(&'p str),
    Index(SequenceIndex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolution<'p> {
    pub(crate) slot: Slot<'p>,
    pub(crate) exists: bool,
    /// Length of the sequence the slot was resolved against, 0 for maps
    pub(crate) len: usize,
}

impl Resolution<'_> {
    /// The error for a slot that does not exist
    pub(crate) fn missing<S: AsRef<str>>(&self, path: &[S], position: usize) -> BadPath {
        match self.slot {
            Slot::Key(_) => BadPath::missing_key(path, position),
            Slot::Index(_) => BadPath::index_out_of_range(path, position, self.len),
        }
    }
}

/// Strict base-10 parse of a sequence index
///
/// Accepts one or more ASCII digits and nothing else: no sign, no whitespace,
/// no partial parse. Leading zeros are allowed (`"007"` is 7).
pub(crate) fn segment_to_index(segment: &str) -> Option<SequenceIndex> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        segment
            .parse::<usize>()
            .map_or(SequenceIndex::Beyond, SequenceIndex::At),
    )
}

/// Resolve `path[position]` against `node`
///
/// Maps use the segment verbatim as a key. Sequences require an integer
/// literal and report whether it falls in `[0, len)`. Leaves cannot be
/// resolved against.
pub(crate) fn resolve_segment<'p, S: AsRef<str>>(
    node: &Value,
    path: &'p [S],
    position: usize,
) -> PathResult<Resolution<'p>> {
    let segment = path[position].as_ref();

    let resolution = match node {
        Value::Object(map) => Resolution {
            slot: Slot::Key(segment),
            exists: map.contains_key(segment),
            len: 0,
        },
        Value::Array(items) => {
            let index = segment_to_index(segment)
                .ok_or_else(|| BadPath::invalid_index(path, position))?;
            let exists = matches!(index, SequenceIndex::At(i) if i < items.len());
            Resolution {
                slot: Slot::Index(index),
                exists,
                len: items.len(),
            }
        }
        leaf => {
            debug_assert_eq!(Shape::of(leaf), Shape::Leaf);
            return Err(BadPath::leaf_traversal(path, position));
        }
    };

    log::trace!(
        "Resolved segment {position} '{segment}' to {:?} (exists: {})",
        resolution.slot,
        resolution.exists
    );
    Ok(resolution)
}

/// Borrow the child a resolution points at, if it exists
pub(crate) fn child<'v>(node: &'v Value, slot: Slot<'_>) -> Option<&'v Value> {
    match (node, slot) {
        (Value::Object(map), Slot::Key(key)) => map.get(key),
        (Value::Array(items), Slot::Index(SequenceIndex::At(index))) => items.get(index),
        _ => None,
    }
}

/// Mutably borrow the child a resolution points at, if it exists
pub(crate) fn child_mut<'v>(node: &'v mut Value, slot: Slot<'_>) -> Option<&'v mut Value> {
    match (node, slot) {
        (Value::Object(map), Slot::Key(key)) => map.get_mut(key),
        (Value::Array(items), Slot::Index(SequenceIndex::At(index))) => items.get_mut(index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::BadPathReason;

    #[test]
    fn index_parsing_is_strict() {
        assert_eq!(segment_to_index("0"), Some(SequenceIndex::At(0)));
        assert_eq!(segment_to_index("42"), Some(SequenceIndex::At(42)));
        assert_eq!(segment_to_index("007"), Some(SequenceIndex::At(7)));

        for rejected in ["", "-1", "+1", " 1", "1 ", "1a", "0x10", "1.0", "a"] {
            assert_eq!(segment_to_index(rejected), None, "accepted {rejected:?}");
        }
    }

    #[test]
    fn oversized_index_is_beyond_every_sequence() {
        assert_eq!(
            segment_to_index("99999999999999999999999999"),
            Some(SequenceIndex::Beyond)
        );
    }

    #[test]
    fn map_resolution_uses_segment_verbatim() {
        let node = json!({"a": 1, " a": 2});
        let path = [" a"];
        let resolution = resolve_segment(&node, &path, 0).expect("map resolves");
        assert_eq!(resolution.slot, Slot::Key(" a"));
        assert!(resolution.exists);
        assert_eq!(child(&node, resolution.slot), Some(&json!(2)));
    }

    #[test]
    fn sequence_resolution_reports_existence() {
        let node = json!([10, 11, 12]);

        let inside = resolve_segment(&node, &["2"], 0).expect("index resolves");
        assert!(inside.exists);

        let outside = resolve_segment(&node, &["3"], 0).expect("index resolves");
        assert!(!outside.exists);
        assert_eq!(outside.len, 3);
        assert_eq!(
            outside.missing(&["3"], 0).reason,
            BadPathReason::IndexOutOfRange
        );
    }

    #[test]
    fn sequence_resolution_rejects_non_integers() {
        let node = json!([10, 11, 12]);
        let error = resolve_segment(&node, &["x", "a"], 1).expect_err("not an index");
        assert_eq!(error.reason, BadPathReason::InvalidIndex);
        assert_eq!(error.segment(), Some("a"));
    }

    #[test]
    fn leaf_cannot_be_resolved_against() {
        let error = resolve_segment(&json!("text"), &["a"], 0).expect_err("leaf");
        assert_eq!(error.reason, BadPathReason::LeafTraversal);
    }
}
