//! Commonly used imports
//!
//! Use `use vessel::prelude::*;` for quick access to the most common types and functions.

// Container types
pub use crate::{Array, Container, Fallible, Optional};

// Captured-failure access
pub use crate::Caught;

// Call-altering wrappers
pub use crate::wrap::{by_clone, coerce, coerce_if, deprecated, retry, retry_if};
