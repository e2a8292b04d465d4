//! Predicates as values.
//!
//! Small combinators that take predicates and return new ones, so that
//! inclusion tests can be built up and handed to [`crate::filter::filter`].

use regex::Regex;

use crate::error::Result;

pub fn not<T: ?Sized, P>(mut p: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |t: &T| !p(t)
}

/// Both must hold. `q` is not evaluated when `p` already rejects.
pub fn all<T: ?Sized, P, Q>(mut p: P, mut q: Q) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
    Q: FnMut(&T) -> bool,
{
    move |t: &T| p(t) && q(t)
}

/// Either may hold. `q` is not evaluated when `p` already accepts.
pub fn any<T: ?Sized, P, Q>(mut p: P, mut q: Q) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
    Q: FnMut(&T) -> bool,
{
    move |t: &T| p(t) || q(t)
}

/// Accepts anything whose string form matches `pattern`.
///
/// ```
/// use strainer::{filter::filter, predicate::matches};
/// let starts_with_h = matches::<&str>("^H").unwrap();
/// let names: Vec<_> = filter(["Homelander", "The Deep", "Stormfront"], starts_with_h).collect();
/// assert_eq!(names, vec!["Homelander"]);
/// ```
// the matcher owns its compiled regex and does not borrow `pattern`
pub fn matches<S: AsRef<str>>(pattern: &str) -> Result<impl Fn(&S) -> bool + use<S>> {
    let regex = Regex::new(pattern)?;
    Ok(move |s: &S| regex.is_match(s.as_ref()))
}
