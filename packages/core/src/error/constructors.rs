//! Error constructor functions
//!
//! Factory methods for [`BadPath`] that attach the path, the failing position
//! and a short human readable detail.

use super::types::{BadPath, BadPathReason};

impl BadPath {
    /// Creates the error for an operation that requires at least one segment
    pub fn empty_path<S: AsRef<str>>(path: &[S]) -> Self {
        BadPath::new(BadPathReason::EmptyPath, path, None, String::new())
    }

    /// Creates the error for a leaf reached while segments remain
    ///
    /// # Examples
    /// ```
    /// use nestpath_core::error::{BadPath, BadPathReason};
    ///
    /// let error = BadPath::leaf_traversal(&["a", "b"], 1);
    /// assert_eq!(error.reason, BadPathReason::LeafTraversal);
    /// assert_eq!(error.segment(), Some("b"));
    /// ```
    pub fn leaf_traversal<S: AsRef<str>>(path: &[S], position: usize) -> Self {
        BadPath::new(
            BadPathReason::LeafTraversal,
            path,
            Some(position),
            String::new(),
        )
    }

    /// Creates the error for a map without the requested key
    pub fn missing_key<S: AsRef<str>>(path: &[S], position: usize) -> Self {
        let message = path
            .get(position)
            .map(|key| format!("no entry '{}'", key.as_ref()))
            .unwrap_or_default();
        BadPath::new(BadPathReason::MissingKey, path, Some(position), message)
    }

    /// Creates the error for an index outside `[0, len)`
    pub fn index_out_of_range<S: AsRef<str>>(path: &[S], position: usize, len: usize) -> Self {
        BadPath::new(
            BadPathReason::IndexOutOfRange,
            path,
            Some(position),
            format!("sequence length is {len}"),
        )
    }

    /// Creates the error for a segment that is not an integer literal, or is
    /// negative where only non-negative indices are accepted
    pub fn invalid_index<S: AsRef<str>>(path: &[S], position: usize) -> Self {
        let message = path
            .get(position)
            .map(|segment| format!("'{}' is not a non-negative integer", segment.as_ref()))
            .unwrap_or_default();
        BadPath::new(BadPathReason::InvalidIndex, path, Some(position), message)
    }

    /// Creates the error for a path longer than the configured maximum
    pub fn depth_limit<S: AsRef<str>>(path: &[S], max_depth: usize) -> Self {
        BadPath::new(
            BadPathReason::DepthLimitExceeded,
            path,
            None,
            format!("{} segments, limit is {max_depth}", path.len()),
        )
    }

    /// Creates the error for a write that would pad a sequence with too many holes
    pub fn hole_limit<S: AsRef<str>>(
        path: &[S],
        position: usize,
        holes: usize,
        max_hole_fill: usize,
    ) -> Self {
        BadPath::new(
            BadPathReason::HoleLimitExceeded,
            path,
            Some(position),
            format!("{holes} holes requested, limit is {max_hole_fill}"),
        )
    }
}
