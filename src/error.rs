//! Crate error types.
//!
//! These describe failures of the container machinery itself, as opposed to
//! the errors captured *from* user transformations, which stay plain
//! [`anyhow::Error`] values inside [`Caught`](crate::Caught).

use thiserror::Error;

/// Failure modes of [`Fallible::recover`](crate::Fallible::recover).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecoverError {
    /// The recovery closure named a type other than the one that was
    /// retained when the chain entered the error state.
    #[error("recovery expected the retained value to be a `{expected}`")]
    TypeMismatch {
        /// Type name the recovery closure asked for.
        expected: &'static str,
    },
}
