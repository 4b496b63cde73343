//! Independent copies of structures

use serde::Serialize;
use serde_json::Value;

use crate::error::DeepCopyError;

/// Copy `structure` so that no map or sequence is shared with the original
///
/// Maps and sequences are rebuilt level by level; leaves are cloned.
#[must_use]
pub fn deep_copy(structure: &Value) -> Value {
    match structure {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), deep_copy(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(deep_copy).collect()),
        leaf => leaf.clone(),
    }
}

/// Build an independent structure from any serializable value
///
/// # Errors
///
/// Returns [`DeepCopyError::Serialization`] when `value` has no structure
/// representation, e.g. a map keyed by something other than strings or
/// integers, or a `Serialize` impl that reports an error.
pub fn deep_copy_from<T: Serialize + ?Sized>(value: &T) -> Result<Value, DeepCopyError> {
    Ok(serde_json::to_value(value)?)
}
