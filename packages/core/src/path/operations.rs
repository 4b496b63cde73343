//! Path construction and relationships

use super::types::NestedPath;

impl NestedPath {
    /// Append a segment in place
    #[inline]
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Remove and return the last segment
    #[inline]
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Create a child path by appending a segment
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    /// Create a child path addressing a sequence index
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    /// Get the parent path (all segments except the last)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Check if this path is a strict descendant of another path
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &NestedPath) -> bool {
        self.segments.len() > ancestor.segments.len()
            && self.segments.starts_with(&ancestor.segments)
    }

    /// Check if this path is a strict ancestor of another path
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &NestedPath) -> bool {
        descendant.is_descendant_of(self)
    }
}
