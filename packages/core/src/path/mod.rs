//! Path representation
//!
//! Operations accept any `&[S]` where `S: AsRef<str>`. [`NestedPath`] is the
//! owned form, with dotted and JSON pointer parsing and a normalized bracket
//! rendering used in error messages.

pub mod operations;
pub mod parser;
pub mod types;

pub use types::{NestedPath, PathSyntaxError, render_segments};
