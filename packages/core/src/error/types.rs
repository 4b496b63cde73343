//! Path Navigation Error Types
//!
//! Core error types for path traversal and structure copying.

use std::error::Error;
use std::fmt;

use crate::path::render_segments;

/// Why a path was rejected
///
/// Every variant is reported as the same error, [`BadPath`]. The reason exists
/// for diagnostics and does not form a separate error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadPathReason {
    /// The operation needs a target segment but the path is empty
    EmptyPath,
    /// Segments remain but the current node is neither a map nor a sequence
    LeafTraversal,
    /// The map has no entry for the segment
    MissingKey,
    /// The index lies outside the sequence
    IndexOutOfRange,
    /// The segment is not a usable integer literal for a sequence
    InvalidIndex,
    /// The path is longer than the configured maximum depth
    DepthLimitExceeded,
    /// Writing the index would insert more holes than configured
    HoleLimitExceeded,
}

impl fmt::Display for BadPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadPathReason::EmptyPath => f.write_str("path is empty"),
            BadPathReason::LeafTraversal => f.write_str("cannot traverse into a leaf value"),
            BadPathReason::MissingKey => f.write_str("key does not exist"),
            BadPathReason::IndexOutOfRange => f.write_str("index out of range"),
            BadPathReason::InvalidIndex => f.write_str("segment is not a valid sequence index"),
            BadPathReason::DepthLimitExceeded => f.write_str("path exceeds the maximum depth"),
            BadPathReason::HoleLimitExceeded => {
                f.write_str("index would insert more holes than allowed")
            }
        }
    }
}

/// The single navigation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadPath {
    pub reason: BadPathReason,
    /// Full path the operation was given
    pub path: Vec<String>,
    /// Index of the offending segment, when one segment is to blame
    pub position: Option<usize>,
    pub message: String,
}

impl fmt::Display for BadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bad path {}: {}", render_segments(&self.path), self.reason)?;
        if let Some(position) = self.position {
            write!(f, " at segment {position}")?;
        }
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}

impl Error for BadPath {}

/// Result type for navigation operations
pub type PathResult<T> = Result<T, BadPath>;

impl BadPath {
    #[must_use]
    pub fn new<S: AsRef<str>>(
        reason: BadPathReason,
        path: &[S],
        position: Option<usize>,
        message: String,
    ) -> Self {
        Self {
            reason,
            path: path.iter().map(|segment| segment.as_ref().to_owned()).collect(),
            position,
            message,
        }
    }

    /// The offending segment, if the error points at one
    #[must_use]
    pub fn segment(&self) -> Option<&str> {
        self.position
            .and_then(|position| self.path.get(position))
            .map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn is_empty_path(&self) -> bool {
        self.reason == BadPathReason::EmptyPath
    }

    /// True when the path named something that is not there, as opposed to
    /// a shape or syntax problem.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.reason,
            BadPathReason::MissingKey | BadPathReason::IndexOutOfRange
        )
    }
}

/// Failure while producing an independent copy of a structure
#[derive(Debug, thiserror::Error)]
pub enum DeepCopyError {
    #[error("Value cannot be represented as a structure: {0}")]
    Serialization(#[from] serde_json::Error),
}
