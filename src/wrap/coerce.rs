//! Error suppression: turn failures into a default value.

/// Run `op`, turning any `Err` into `default`.
///
/// The error is discarded; use [`coerce_if`] to suppress selectively.
///
/// # Examples
///
/// ```rust
/// use vessel::wrap::coerce;
///
/// let port = coerce(8080, || "not-a-port".parse::<u16>());
/// assert_eq!(port, 8080);
///
/// let port = coerce(8080, || "9000".parse::<u16>());
/// assert_eq!(port, 9000);
/// ```
pub fn coerce<T, E, F>(default: T, op: F) -> T
where
    F: FnOnce() -> Result<T, E>,
{
    op().unwrap_or(default)
}

/// Run `op`, turning errors the predicate matches into `Ok(default)`.
///
/// Non-matching errors propagate untouched.
///
/// # Examples
///
/// ```rust
/// use std::num::IntErrorKind;
/// use vessel::wrap::coerce_if;
///
/// let out = coerce_if(
///     0,
///     |e: &std::num::ParseIntError| *e.kind() == IntErrorKind::Empty,
///     || "".parse::<i32>(),
/// );
/// assert_eq!(out, Ok(0));
/// ```
pub fn coerce_if<T, E, F, P>(default: T, matches: P, op: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    P: FnOnce(&E) -> bool,
{
    match op() {
        Ok(value) => Ok(value),
        Err(error) if matches(&error) => Ok(default),
        Err(error) => Err(error),
    }
}
