//! The base identity container.
//!
//! [`Container`] wraps a single value and exposes [`then`](Container::then)
//! for chaining transformations. It adds no behavior on top of the call
//! itself: the function is always applied, and anything it panics with
//! propagates straight to the caller. The other container types build on the
//! same surface with extra semantics ([`Array`](crate::Array) maps over
//! elements, [`Fallible`](crate::Fallible) captures errors,
//! [`Optional`](crate::Optional) skips absent values).
//!
//! # Examples
//!
//! ```rust
//! use vessel::Container;
//!
//! let shouted = Container::new("hello world")
//!     .then(str::to_uppercase)
//!     .then(|s| s + "!!!")
//!     .unwrap();
//! assert_eq!(shouted, "HELLO WORLD!!!");
//! ```

use std::fmt;
use std::ops::Shr;

/// Wraps one value and chains transformations over it.
///
/// Every [`then`](Container::then) consumes the container and returns a new
/// one holding the function's result; the receiver is never mutated.
///
/// ```rust
/// use vessel::Container;
///
/// let n = Container::new(4).then(|x| x + 6).then(|x| x - 2).unwrap();
/// assert_eq!(n, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Container<T>(T);

impl<T> Container<T> {
    /// Wrap a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Container(value)
    }

    /// Apply `f` to the held value, wrapping the result.
    ///
    /// `Container` applies no policy of its own: `f` runs unconditionally,
    /// and a panic inside it propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::Container;
    ///
    /// assert_eq!(Container::new(2).then(|x| x + 1), Container::new(3));
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> U,
    {
        Container(f(self.0))
    }

    /// Apply an ordered sequence of same-typed steps in one call.
    ///
    /// Each step receives the previous step's output. Useful when the steps
    /// are collected at runtime rather than written inline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::Container;
    ///
    /// fn increment(x: i32) -> i32 { x + 1 }
    /// fn double(x: i32) -> i32 { x * 2 }
    ///
    /// let steps: [fn(i32) -> i32; 2] = [increment, double];
    /// assert_eq!(Container::new(3).pipe(steps).unwrap(), 8);
    /// ```
    #[inline]
    pub fn pipe<F, I>(self, funcs: I) -> Container<T>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> T,
    {
        Container(funcs.into_iter().fold(self.0, |value, f| f(value)))
    }

    /// Return the held value, discarding the container.
    ///
    /// ```rust
    /// use vessel::Container;
    ///
    /// assert_eq!(Container::new(4).unwrap(), 4);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Borrow the held value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Container(value)
    }
}

/// `container >> f` is a synonym for [`Container::then`].
///
/// ```rust
/// use vessel::Container;
///
/// let n = Container::new(2) >> (|x| x + 1) >> (|x| x * 3);
/// assert_eq!(n, Container::new(9));
/// ```
impl<T, U, F> Shr<F> for Container<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Container<U>;

    fn shr(self, f: F) -> Container<U> {
        self.then(f)
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container({})", self.0)
    }
}
