//! # nestpath core
//!
//! Path-traversal engine for nested structures of maps and sequences, the
//! shape produced by parsing JSON. A path is a list of string segments; each
//! one is applied to the node reached so far, as a key for maps and as a
//! base-10 index for sequences.
//!
//! ## Operations
//!
//! - [`dig`] reads the value at a path
//! - [`bury`] writes a value, creating intermediate maps
//! - [`delete`] removes and returns a value
//! - [`path_exists`] tests for a value without failing on a miss
//! - [`deep_copy`] produces an unshared copy of a structure
//!
//! All navigation failures are a single error, [`BadPath`].
//!
//! ```rust
//! use nestpath_core::{bury, dig};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! bury(&mut doc, &["a", "0"], json!(42)).expect("path is writable");
//! assert_eq!(doc, json!({"a": {"0": 42}}));
//! assert_eq!(dig(&doc, &["a", "0"]).expect("path exists"), &json!(42));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod copy;
pub mod error;
pub mod navigator;
pub mod path;

pub mod prelude;

pub use crate::prelude::*;
