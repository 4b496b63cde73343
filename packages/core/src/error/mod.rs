//! Navigation error handling module
//!
//! One error kind, [`BadPath`], covers every invalid, type-mismatched or
//! non-existent path. Copy failures are reported separately through
//! [`DeepCopyError`].

mod constructors;
mod types;

pub use types::{BadPath, BadPathReason, DeepCopyError, PathResult};
