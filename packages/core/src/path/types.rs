//! Core path types
//!
//! A [`NestedPath`] is an owned, ordered list of string segments. Segments are
//! always strings; whether one names a map key or a sequence index is decided
//! by the structure it is applied to, never by the path itself.

use std::fmt;

/// Owned sequence of path segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NestedPath {
    pub(crate) segments: Vec<String>,
}

/// Path string parsing failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathSyntaxError {
    #[error("empty segment at position {position} in dotted path '{input}'")]
    EmptySegment { input: String, position: usize },

    #[error("JSON pointer '{input}' must be empty or start with '/'")]
    MissingLeadingSlash { input: String },

    #[error("invalid escape sequence at byte {offset} in JSON pointer '{input}'")]
    InvalidEscape { input: String, offset: usize },
}

impl NestedPath {
    /// The empty path, which denotes the root structure
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl AsRef<[String]> for NestedPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

impl<S: Into<String>> FromIterator<S> for NestedPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for NestedPath {
    fn from(segments: Vec<S>) -> Self {
        Self::from_segments(segments)
    }
}

impl<'a> IntoIterator for &'a NestedPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Renders segments in normalized bracket form, e.g. `$['a']['0']`
///
/// Quotes and backslashes inside a segment are escaped with a backslash.
pub fn render_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut rendered = String::from("$");
    for segment in segments {
        rendered.push_str("['");
        for ch in segment.as_ref().chars() {
            if ch == '\'' || ch == '\\' {
                rendered.push('\\');
            }
            rendered.push(ch);
        }
        rendered.push_str("']");
    }
    rendered
}

impl fmt::Display for NestedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_segments(&self.segments))
    }
}
