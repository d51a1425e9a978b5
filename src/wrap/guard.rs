//! Mutation isolation and deprecation marking.

/// Adapt an owning function into one that works on a clone.
///
/// The returned closure borrows the caller's value and hands the wrapped
/// function a clone, so whatever the function does to its argument happens
/// to the copy and the original is left untouched.
///
/// # Examples
///
/// ```rust
/// use vessel::wrap::by_clone;
///
/// let mut drain = by_clone(|mut items: Vec<i32>| {
///     items.push(4);
///     items.len()
/// });
///
/// let original = vec![1, 2, 3];
/// assert_eq!(drain(&original), 4);
/// assert_eq!(original, vec![1, 2, 3]); // untouched
/// ```
///
/// Cloning happens on every call; large values pay for it each time.
pub fn by_clone<T, U, F>(mut f: F) -> impl FnMut(&T) -> U
where
    T: Clone,
    F: FnMut(T) -> U,
{
    move |value: &T| f(value.clone())
}

/// Mark a function as deprecated: every call emits a `tracing` warning
/// before delegating.
///
/// # Examples
///
/// ```rust
/// use vessel::wrap::deprecated;
///
/// let mut old_double = deprecated("old_double", |x: i32| x * 2);
/// assert_eq!(old_double(21), 42); // warns, then runs
/// ```
pub fn deprecated<A, R, F>(name: &'static str, mut f: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
{
    move |input| {
        tracing::warn!(function = name, "call to deprecated function");
        f(input)
    }
}
