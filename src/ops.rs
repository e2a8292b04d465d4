//! Arithmetic through function values.
//!
//! A calculation strategy is just a value: a function item, a closure or a
//! generic function pointer can all be handed to [`calculate`].

/// A binary integer operation, usable as a plain function pointer.
pub type MathOp = fn(i32, i32) -> i32;

/// The same shape, for any operand type.
pub type MathOpGeneric<T> = fn(T, T) -> T;

pub fn add(x: i32, y: i32) -> i32 {
    x + y
}

pub fn subtract(x: i32, y: i32) -> i32 {
    x - y
}

/// Applies `op` to `x` and `y`.
///
/// ```
/// use strainer::ops::{calculate, subtract, MathOp};
/// let f: MathOp = subtract;
/// assert_eq!(calculate(20, 3, f), 17);
/// assert_eq!(calculate(12, 3, |x, y| x * y), 36);
/// assert!(calculate(true, false, |x, y| x || y));
/// ```
pub fn calculate<T, F>(x: T, y: T, op: F) -> T
where
    F: FnOnce(T, T) -> T,
{
    op(x, y)
}
