//! Bounded re-execution of fallible operations.

/// Run `op` up to `attempts` times, returning the first `Ok` or the last
/// `Err`.
///
/// Each failed attempt is logged at debug level. The operation runs at
/// least once.
///
/// # Panics
///
/// Panics if `attempts` is zero.
///
/// # Examples
///
/// ```rust
/// use vessel::wrap::retry;
///
/// let mut remaining_failures = 2;
/// let out = retry(3, || {
///     if remaining_failures > 0 {
///         remaining_failures -= 1;
///         Err("not yet")
///     } else {
///         Ok(7)
///     }
/// });
/// assert_eq!(out, Ok(7));
/// ```
///
/// Watch out for side effects: a retried operation that writes somewhere
/// will write once per attempt.
pub fn retry<T, E, F>(attempts: usize, op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    retry_if(attempts, |_| true, op)
}

/// Like [`retry`], but only errors the predicate matches are retried.
///
/// A non-matching error returns immediately, attempts left or not.
///
/// # Panics
///
/// Panics if `attempts` is zero.
///
/// # Examples
///
/// ```rust
/// use std::num::IntErrorKind;
/// use vessel::wrap::retry_if;
///
/// let out: Result<u8, _> = retry_if(
///     3,
///     |e: &std::num::ParseIntError| *e.kind() == IntErrorKind::Empty,
///     || "300".parse::<u8>(),
/// );
/// // Out-of-range errors are not retried; the first one comes straight back.
/// assert!(out.is_err());
/// ```
pub fn retry_if<T, E, F, P>(attempts: usize, mut matches: P, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    assert!(attempts > 0, "retry requires at least one attempt");

    let mut last = None;
    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Ok(value),
            Err(error) => {
                if !matches(&error) {
                    return Err(error);
                }
                tracing::debug!(attempt, attempts, "retried operation failed");
                last = Some(error);
            }
        }
    }
    Err(last.expect("attempts is non-zero, so at least one error was recorded"))
}
