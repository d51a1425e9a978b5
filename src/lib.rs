//! # Vessel: Chainable Value Containers
//!
//! Wrap a value once, then compose transformations point-free with
//! [`then`](Container::then). Each variant adds its own policy for what a
//! step means and what happens when one goes wrong.
//!
//! ## Core Types
//!
//! - **[`Container<T>`]**: identity semantics; every step runs and failures
//!   propagate to the caller
//! - **[`Array<T>`]**: steps apply to every element of an ordered sequence
//! - **[`Fallible<T>`]**: the first failure is captured as a value and the
//!   rest of the chain is skipped, until recovered or unwrapped
//! - **[`Optional<T>`]**: steps are skipped once the value is absent
//!
//! ## Key Features
//!
//! - **Immutable**: every step consumes its container and returns a new one
//! - **Short-circuiting**: errored and empty chains never invoke later steps
//! - **Recoverable**: [`Fallible`] retains the last known-good value, so
//!   [`recover`](Fallible::recover) can resume from the point of failure
//! - **Operator sugar**: `container >> f` is `then` on every variant
//!
//! ## Example
//!
//! ```rust
//! use vessel::prelude::*;
//!
//! // Chain plain transformations through the identity container.
//! let n = Container::new(4).then(|x| x + 6).then(|x| x - 2).unwrap();
//! assert_eq!(n, 8);
//!
//! // Capture a failure mid-chain and fall back.
//! let n = Fallible::new(4)
//!     .map(|x| x + 6)
//!     .then(|_| "not a number".parse::<i32>())
//!     .map(|x| x - 2)
//!     .unwrap_or(42);
//! assert_eq!(n, 42);
//!
//! // Map over every element of a sequence.
//! let doubled = Array::new([1, 2, 3]).then(|x| x * 2).then(|x| x + 1);
//! assert_eq!(doubled.unwrap(), vec![3, 5, 7]);
//! ```
//!
//! ## Call-Altering Wrappers
//!
//! The independent [`wrap`] module changes how plain closures are called:
//! [`wrap::retry`] re-runs a failing operation, [`wrap::coerce`] suppresses
//! errors into a default, [`wrap::by_clone`] isolates the caller's value
//! from mutation, and [`wrap::deprecated`] warns on every call.

mod array;
mod container;
mod error;
mod fallible;
mod optional;

pub mod prelude;
pub mod wrap;

pub use array::Array;
pub use container::Container;
pub use error::RecoverError;
pub use fallible::{Caught, Fallible};
pub use optional::Optional;
