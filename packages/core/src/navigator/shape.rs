//! Structure shape classification

use serde_json::Value;

/// The three kinds of node a traversal can meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `Value::Object`
    Map,
    /// `Value::Array`
    Sequence,
    /// Anything else, `null` included
    Leaf,
}

impl Shape {
    #[inline]
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Shape::Map,
            Value::Array(_) => Shape::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Leaf,
        }
    }

    /// Whether a path segment can be resolved against this shape
    #[inline]
    #[must_use]
    pub fn is_container(self) -> bool {
        !matches!(self, Shape::Leaf)
    }
}
