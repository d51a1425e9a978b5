//! A container that captures errors instead of propagating them.
//!
//! [`Fallible`] is a two-state chain: `Ok` while every transformation
//! succeeds, `Errored` from the first failure onward. Transformations are
//! fallible closures returning [`Result`]; an `Err` is caught, stored as a
//! value, and carried forward, and every later [`then`](Fallible::then) is
//! skipped without invoking its function. The error only surfaces when the
//! caller asks for it: loudly via [`unwrap`](Fallible::unwrap) and
//! [`into_result`](Fallible::into_result), or quietly via
//! [`unwrap_or`](Fallible::unwrap_or).
//!
//! Alongside the error, the container retains the last known-good value, so
//! [`recover`](Fallible::recover) can re-attempt the chain from the point of
//! failure.
//!
//! # Examples
//!
//! ```rust
//! use vessel::Fallible;
//!
//! let out = Fallible::new(4)
//!     .map(|x| x + 6)
//!     .then(|_| "not a number".parse::<i32>())
//!     .map(|x| x - 2)
//!     .unwrap_or(42);
//! assert_eq!(out, 42);
//! ```

use std::any::{self, Any};
use std::fmt;
use std::ops::Shr;

use either::Either;

use crate::error::RecoverError;

/// The stored failure inside an errored [`Fallible`]: the captured error
/// plus the last known-good value, kept for [`Fallible::recover`].
pub struct Caught {
    error: anyhow::Error,
    last_good: Box<dyn Any + Send>,
}

impl Caught {
    /// The captured error.
    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    /// Consume the capture, keeping only the error.
    pub fn into_error(self) -> anyhow::Error {
        self.error
    }

    /// The retained last known-good value, as seen before the failing step.
    pub fn retained(&self) -> &(dyn Any + Send) {
        self.last_good.as_ref()
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caught")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// A chain that goes on after a failure, carrying the error as a value.
///
/// ```rust
/// use vessel::Fallible;
///
/// let out = Fallible::new("three").then(|s| s.parse::<i32>());
/// assert!(out.is_errored());
/// assert_eq!(out.unwrap_or(4), 4);
/// ```
#[derive(Debug)]
pub enum Fallible<T> {
    /// Every step so far has succeeded.
    Ok(T),
    /// A step failed; the capture holds the error and the value the chain
    /// held immediately before it.
    Errored(Caught),
}

impl<T> Fallible<T> {
    /// Start a chain in the `Ok` state.
    #[inline]
    pub const fn new(value: T) -> Self {
        Fallible::Ok(value)
    }

    /// Apply a fallible transformation.
    ///
    /// In the `Ok` state the closure runs on the held value: `Ok(next)`
    /// continues the chain, `Err(e)` moves it to `Errored`, capturing the
    /// error together with a clone of the input taken before the call (the
    /// value [`recover`](Fallible::recover) will see). In the `Errored`
    /// state the closure is never invoked and the original capture is
    /// carried forward unchanged.
    ///
    /// Any error convertible into [`anyhow::Error`] can flow in, which
    /// covers every `std::error::Error + Send + Sync` type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::Fallible;
    ///
    /// let parsed = Fallible::new("17").then(|s| s.parse::<i32>());
    /// assert_eq!(parsed.unwrap(), 17);
    /// ```
    pub fn then<U, E, F>(self, f: F) -> Fallible<U>
    where
        T: Clone + Send + Any,
        E: Into<anyhow::Error>,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Fallible::Ok(value) => {
                // Cloned up front: once `f` consumes the value, a failure
                // would otherwise leave nothing to recover from.
                let retained = value.clone();
                match f(value) {
                    Ok(next) => Fallible::Ok(next),
                    Err(error) => Fallible::Errored(Caught {
                        error: error.into(),
                        last_good: Box::new(retained),
                    }),
                }
            }
            Fallible::Errored(caught) => Fallible::Errored(caught),
        }
    }

    /// Apply an infallible transformation.
    ///
    /// Like [`then`](Fallible::then) but the closure cannot fail, so no
    /// value needs to be retained and no bounds apply. In the `Errored`
    /// state the closure is skipped.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Fallible::Ok(value) => Fallible::Ok(f(value)),
            Fallible::Errored(caught) => Fallible::Errored(caught),
        }
    }

    /// Re-attempt the chain from the last known-good value.
    ///
    /// A no-op in the `Ok` state. In the `Errored` state the closure
    /// receives the value held immediately before the failing step, typed as
    /// `P` (its concrete type at that point in the chain): success
    /// transitions back to `Ok`, failure stays `Errored` with the new error
    /// and the same retained value.
    ///
    /// If `P` is not the retained value's type the container stays
    /// `Errored` and a [`RecoverError::TypeMismatch`] context is layered
    /// over the original error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::Fallible;
    ///
    /// let out = Fallible::new(4)
    ///     .then(|_| "nope".parse::<i32>())
    ///     .recover(|x: i32| Ok::<_, std::num::ParseIntError>(x + 38))
    ///     .unwrap();
    /// assert_eq!(out, 42);
    /// ```
    pub fn recover<P, E, F>(self, f: F) -> Fallible<T>
    where
        P: Clone + Send + Any,
        E: Into<anyhow::Error>,
        F: FnOnce(P) -> Result<T, E>,
    {
        let Caught { error, last_good } = match self {
            Fallible::Ok(value) => return Fallible::Ok(value),
            Fallible::Errored(caught) => caught,
        };

        match last_good.downcast::<P>() {
            Ok(last_good) => {
                let retained = last_good.clone();
                match f(*last_good) {
                    Ok(value) => Fallible::Ok(value),
                    Err(error) => Fallible::Errored(Caught {
                        error: error.into(),
                        last_good: retained,
                    }),
                }
            }
            Err(last_good) => Fallible::Errored(Caught {
                error: error.context(RecoverError::TypeMismatch {
                    expected: any::type_name::<P>(),
                }),
                last_good,
            }),
        }
    }

    /// Returns `true` while no step has failed.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Fallible::Ok(_))
    }

    /// Returns `true` once a step has failed.
    #[inline]
    pub const fn is_errored(&self) -> bool {
        matches!(self, Fallible::Errored(_))
    }

    /// Borrow the held value, if the chain is still `Ok`.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Fallible::Ok(value) => Some(value),
            Fallible::Errored(_) => None,
        }
    }

    /// Borrow the captured error, if any.
    ///
    /// `None` in the `Ok` state; the error is never silently dropped.
    #[inline]
    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Fallible::Ok(_) => None,
            Fallible::Errored(caught) => Some(&caught.error),
        }
    }

    /// Return the held value, consuming the chain.
    ///
    /// # Panics
    ///
    /// Panics with the captured error if a step failed. Use
    /// [`into_result`](Fallible::into_result) to surface the error without
    /// panicking, or [`unwrap_or`](Fallible::unwrap_or) to swallow it.
    pub fn unwrap(self) -> T {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Errored(caught) => panic!(
                "called `Fallible::unwrap()` on an `Errored` value: {}",
                caught.error
            ),
        }
    }

    /// Convert into a plain [`Result`], surfacing the captured error.
    pub fn into_result(self) -> Result<T, anyhow::Error> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Errored(caught) => Err(caught.error),
        }
    }

    /// Return the held value, or `default` if a step failed. Never panics.
    ///
    /// ```rust
    /// use vessel::Fallible;
    ///
    /// let out = Fallible::new("nope").then(|s| s.parse::<i32>()).unwrap_or(42);
    /// assert_eq!(out, 42);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Errored(_) => default,
        }
    }

    /// Return the held value, or compute a fallback from the captured error.
    ///
    /// The closure can inspect the error (e.g. `downcast_ref` to a concrete
    /// type) to decide the fallback.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(&anyhow::Error) -> T,
    {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Errored(caught) => f(&caught.error),
        }
    }

    /// Decompose into the success value or the capture.
    ///
    /// ```rust
    /// use either::Either;
    /// use vessel::Fallible;
    ///
    /// match Fallible::new(3).split() {
    ///     Either::Left(value) => assert_eq!(value, 3),
    ///     Either::Right(_) => unreachable!(),
    /// }
    /// ```
    pub fn split(self) -> Either<T, Caught> {
        match self {
            Fallible::Ok(value) => Either::Left(value),
            Fallible::Errored(caught) => Either::Right(caught),
        }
    }
}

impl<T> From<T> for Fallible<T> {
    fn from(value: T) -> Self {
        Fallible::Ok(value)
    }
}

/// `fallible >> f` is a synonym for [`Fallible::then`].
impl<T, U, E, F> Shr<F> for Fallible<T>
where
    T: Clone + Send + Any,
    E: Into<anyhow::Error>,
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Fallible<U>;

    fn shr(self, f: F) -> Fallible<U> {
        self.then(f)
    }
}

impl<T: fmt::Display> fmt::Display for Fallible<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallible::Ok(value) => write!(f, "Fallible({value})"),
            Fallible::Errored(caught) => write!(f, "Fallible({})", caught.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("division by zero")]
    struct DivideByZero;

    fn checked_div(value: i32, divisor: i32) -> Result<i32, DivideByZero> {
        if divisor == 0 {
            Err(DivideByZero)
        } else {
            Ok(value / divisor)
        }
    }

    #[test]
    fn test_then_chains_while_ok() {
        let out = Fallible::new(2)
            .then(|x| checked_div(x + 4, 2))
            .then(|x| checked_div(x * 4, 2))
            .unwrap();
        assert_eq!(out, 6);
    }

    #[test]
    fn test_then_captures_error_without_panicking() {
        let out = Fallible::new(1).then(|x| checked_div(x, 0));

        assert!(out.is_errored());
        assert!(out.value().is_none());
        let error = out.error().expect("error should be captured");
        assert_eq!(error.downcast_ref::<DivideByZero>(), Some(&DivideByZero));
    }

    #[test]
    fn test_then_short_circuits_after_error() {
        let calls = Cell::new(0u32);
        let out = Fallible::new(1).then(|x| checked_div(x, 0)).then(|x| {
            calls.set(calls.get() + 1);
            checked_div(x, 1)
        });

        assert_eq!(calls.get(), 0);
        assert!(out.is_errored());
    }

    #[test]
    fn test_errored_chain_keeps_original_error() {
        let out = Fallible::new(1)
            .then(|x| checked_div(x, 0))
            .then(|x| checked_div(x, 1))
            .then(|x| checked_div(x, 1));

        let error = out.error().expect("error should survive the chain");
        assert_eq!(error.downcast_ref::<DivideByZero>(), Some(&DivideByZero));
    }

    #[test]
    fn test_map_skips_when_errored() {
        let calls = Cell::new(0u32);
        let out = Fallible::new(1).then(|x| checked_div(x, 0)).map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(calls.get(), 0);
        assert!(out.is_errored());
    }

    #[test]
    fn test_unwrap_or_returns_default_when_errored() {
        let out = Fallible::new(4)
            .map(|x| x + 6)
            .then(|x| checked_div(x, 0))
            .map(|x| x - 2)
            .unwrap_or(42);
        assert_eq!(out, 42);
    }

    #[test]
    fn test_unwrap_or_keeps_value_when_ok() {
        assert_eq!(Fallible::new(1).unwrap_or(99), 1);
    }

    #[test]
    fn test_unwrap_or_else_can_inspect_error() {
        let out = Fallible::new(3)
            .then(|x| checked_div(x, 0))
            .unwrap_or_else(|error| {
                if error.downcast_ref::<DivideByZero>().is_some() {
                    42
                } else {
                    0
                }
            });
        assert_eq!(out, 42);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_unwrap_panics_with_captured_error() {
        Fallible::new(1).then(|x| checked_div(x, 0)).unwrap();
    }

    #[test]
    fn test_into_result_surfaces_error() {
        let ok = Fallible::new(5).into_result().expect("should be ok");
        assert_eq!(ok, 5);

        let err = Fallible::new(1)
            .then(|x| checked_div(x, 0))
            .into_result()
            .expect_err("should be errored");
        assert_eq!(err.downcast_ref::<DivideByZero>(), Some(&DivideByZero));
    }

    #[test]
    fn test_recover_reapplies_from_last_good_value() {
        let out = Fallible::new(3)
            .then(|x| checked_div(x, 0))
            .recover(|x: i32| Ok::<_, DivideByZero>(x - 1));
        assert_eq!(out.unwrap(), 2);

        let out = Fallible::new(4)
            .then(|x| checked_div(x, 0))
            .recover(|_: i32| Ok::<_, DivideByZero>(42));
        assert_eq!(out.unwrap(), 42);
    }

    #[test]
    fn test_recover_is_noop_when_ok() {
        let out = Fallible::new(3)
            .then(|x| checked_div(x, 1))
            .recover(|_: i32| Ok::<_, DivideByZero>(9));
        assert_eq!(out.unwrap(), 3);
    }

    #[test]
    fn test_recover_failure_stays_errored_and_retains_value() {
        let out = Fallible::new(3)
            .then(|x| checked_div(x, 0))
            .recover(|x: i32| checked_div(x, 0));
        assert!(out.is_errored());

        // The retained value survives the failed recovery attempt.
        let out = out.recover(|x: i32| Ok::<_, DivideByZero>(x + 1));
        assert_eq!(out.unwrap(), 4);
    }

    #[test]
    fn test_recover_with_wrong_type_reports_mismatch() {
        let out = Fallible::new(3)
            .then(|x| checked_div(x, 0))
            .recover(|s: String| Ok::<_, DivideByZero>(s.len() as i32));

        let error = out.error().expect("should still be errored");
        assert!(error.to_string().contains("recovery expected"));
        // The original failure remains the cause underneath the context.
        assert_eq!(
            error.root_cause().downcast_ref::<DivideByZero>(),
            Some(&DivideByZero)
        );

        // A correctly typed recovery still works afterwards.
        let out = out.recover(|x: i32| Ok::<_, DivideByZero>(x * 10));
        assert_eq!(out.unwrap(), 30);
    }

    #[test]
    fn test_shr_operator_matches_then() {
        let out = Fallible::new(4) >> (|x| checked_div(x + 6, 1)) >> (|x| checked_div(x, 0));
        assert_eq!(out.unwrap_or(42), 42);
    }

    #[test]
    fn test_split_returns_value_or_caught() {
        match Fallible::new(3).split() {
            Either::Left(value) => assert_eq!(value, 3),
            Either::Right(_) => panic!("ok chain should split left"),
        }

        match Fallible::new(1).then(|x| checked_div(x, 0)).split() {
            Either::Left(_) => panic!("errored chain should split right"),
            Either::Right(caught) => {
                assert_eq!(
                    caught.error().downcast_ref::<DivideByZero>(),
                    Some(&DivideByZero)
                );
                assert_eq!(caught.retained().downcast_ref::<i32>(), Some(&1));
            }
        }
    }

    #[test]
    fn test_display_shows_value_or_error() {
        assert_eq!(Fallible::new(3).to_string(), "Fallible(3)");

        let errored = Fallible::new(1).then(|x| checked_div(x, 0));
        assert_eq!(errored.to_string(), "Fallible(division by zero)");
    }
}
