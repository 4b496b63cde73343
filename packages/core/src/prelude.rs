//! nestpath Prelude
//!
//! The types and functions callers need for path navigation.

// Navigation operations
pub use crate::navigator::{Navigator, Shape, bury, delete, dig, dig_mut, path_exists};

// Copying
pub use crate::copy::{deep_copy, deep_copy_from};

// Error types
pub use crate::error::{BadPath, BadPathReason, DeepCopyError, PathResult};

// Configuration
pub use crate::config::{ConfigurationError, NavigatorConfig, Validator};

// Paths
pub use crate::path::{NestedPath, PathSyntaxError};
