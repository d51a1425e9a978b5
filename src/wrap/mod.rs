//! Call-altering function wrappers.
//!
//! Each wrapper takes a closure and changes its calling contract without
//! touching its logic: bounded re-execution on failure ([`retry`],
//! [`retry_if`]), error suppression to a default ([`coerce`], [`coerce_if`]),
//! mutation isolation via clone-before-call ([`by_clone`]), and warn-on-call
//! deprecation marking ([`deprecated`]).
//!
//! The wrappers have no coupling to the container types; they are consumed
//! independently.
//!
//! # Examples
//!
//! ```rust
//! use vessel::wrap::{coerce, retry};
//!
//! let mut attempts = 0;
//! let out = retry(3, || {
//!     attempts += 1;
//!     if attempts < 3 { Err("flaky") } else { Ok(attempts) }
//! });
//! assert_eq!(out, Ok(3));
//!
//! let port = coerce(8080, || "not-a-port".parse::<u16>());
//! assert_eq!(port, 8080);
//! ```

mod coerce;
mod guard;
mod retry;

pub use coerce::{coerce, coerce_if};
pub use guard::{by_clone, deprecated};
pub use retry::{retry, retry_if};
