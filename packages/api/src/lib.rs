//! nestpath Public API
//!
//! Read, write, delete and test for values at string paths inside nested
//! JSON-shaped structures. The engine lives in `nestpath_core`; this crate
//! re-exports it and adds [`NestedExt`], which makes every operation callable
//! as a method on `serde_json::Value`.
//!
//! ```rust
//! use nestpath::NestedExt;
//! use serde_json::json;
//!
//! let mut doc = json!({"a": {"b": [1, 2, 3]}});
//! assert_eq!(doc.nested_dig(&["a", "b", "0"]).expect("exists"), &json!(1));
//!
//! doc.nested_bury(&["a", "c"], "new").expect("writable");
//! assert_eq!(doc.nested_delete(&["a", "b", "0"]).expect("exists"), json!(1));
//! assert_eq!(doc, json!({"a": {"b": [2, 3], "c": "new"}}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod nested;

pub use nested::NestedExt;

// Re-export the engine
pub use nestpath_core::{
    BadPath, BadPathReason, ConfigurationError, DeepCopyError, Navigator, NavigatorConfig,
    NestedPath, PathResult, PathSyntaxError, Shape, Validator, bury, deep_copy, deep_copy_from,
    delete, dig, dig_mut, path_exists,
};
pub use nestpath_core::{config, error, path};
