//! Path string parsing
//!
//! Two textual forms are accepted: dotted paths (`a.b.0`) and RFC 6901 JSON
//! pointers (`/a/b/0`).

use std::str::FromStr;

use super::types::{NestedPath, PathSyntaxError};

impl NestedPath {
    /// Parse a dotted path such as `store.book.0.title`
    ///
    /// The empty string is the root path. Keys containing `.` cannot be
    /// expressed in this form; use [`NestedPath::parse_pointer`] instead.
    ///
    /// # Errors
    ///
    /// Returns `PathSyntaxError::EmptySegment` for leading, trailing or
    /// doubled dots.
    pub fn parse_dotted(input: &str) -> Result<Self, PathSyntaxError> {
        if input.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for (position, segment) in input.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathSyntaxError::EmptySegment {
                    input: input.to_owned(),
                    position,
                });
            }
            segments.push(segment.to_owned());
        }

        Ok(Self { segments })
    }

    /// Parse an RFC 6901 JSON pointer such as `/store/book/0/title`
    ///
    /// `~1` decodes to `/` and `~0` to `~`. Empty reference tokens are kept,
    /// so `/` addresses the key `""`.
    ///
    /// # Errors
    ///
    /// Returns `PathSyntaxError::MissingLeadingSlash` if a non-empty pointer
    /// does not start with `/`, and `PathSyntaxError::InvalidEscape` for a `~`
    /// not followed by `0` or `1`.
    pub fn parse_pointer(input: &str) -> Result<Self, PathSyntaxError> {
        if input.is_empty() {
            return Ok(Self::root());
        }

        let Some(body) = input.strip_prefix('/') else {
            return Err(PathSyntaxError::MissingLeadingSlash {
                input: input.to_owned(),
            });
        };

        let mut segments = Vec::new();
        let mut offset = 1;
        for token in body.split('/') {
            segments.push(Self::unescape_token(token, input, offset)?);
            offset += token.len() + 1;
        }

        Ok(Self { segments })
    }

    fn unescape_token(token: &str, input: &str, offset: usize) -> Result<String, PathSyntaxError> {
        if !token.contains('~') {
            return Ok(token.to_owned());
        }

        let mut decoded = String::with_capacity(token.len());
        let mut chars = token.char_indices();
        while let Some((index, ch)) = chars.next() {
            if ch != '~' {
                decoded.push(ch);
                continue;
            }
            match chars.next() {
                Some((_, '0')) => decoded.push('~'),
                Some((_, '1')) => decoded.push('/'),
                _ => {
                    return Err(PathSyntaxError::InvalidEscape {
                        input: input.to_owned(),
                        offset: offset + index,
                    });
                }
            }
        }
        Ok(decoded)
    }

    /// Render as an RFC 6901 JSON pointer
    #[must_use]
    pub fn to_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.segments {
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        }
        pointer
    }
}

impl FromStr for NestedPath {
    type Err = PathSyntaxError;

    /// Pointers start with `/`; anything else is read as a dotted path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            Self::parse_pointer(s)
        } else {
            Self::parse_dotted(s)
        }
    }
}
