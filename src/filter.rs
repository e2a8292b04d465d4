//! Lazy, forward-only filtering of sequences.
//!
//! [`filter`] wraps any source that can be iterated and a predicate into a
//! [`Filter`], which yields the source elements the predicate accepts, in
//! their original order. Nothing is evaluated when the filter is created:
//! each call to [`Iterator::next`] pulls source elements one at a time and
//! stops at the first one the predicate accepts. This makes it safe to use
//! on infinite sources, as long as the consumer asks for a bounded number
//! of matches.
//!
//! ```
//! use strainer::filter::filter;
//! let evens: Vec<u32> = filter(1..=5, |n| n % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4]);
//! // the first even number among the naturals, without exhausting them
//! assert_eq!(filter(1u64.., |n| n % 2 == 0).next(), Some(2));
//! ```
//!
//! A filter is single-pass. It cannot be cloned or rewound; a second pass
//! means calling [`filter`] again over a fresh source.
//!
//! Predicates that can fail are handled by [`try_filter`], which hands the
//! first failure to the consumer at the element that produced it and then
//! stops.

use std::fmt;
use std::iter::FusedIterator;

/// Yields the elements of `source` for which `predicate` returns `true`.
///
/// The predicate sees each element by reference, at most once, in source
/// order, and only when the consumer demands the next output element.
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Filter { source: source.into_iter(), predicate }
}

/// Like [`filter`], but for predicates returning `Result<bool, E>`.
///
/// Accepted elements come out as `Ok`. The first `Err` is yielded as-is in
/// place of the element that caused it, after which the iterator is
/// exhausted.
pub fn try_filter<S, P, E>(source: S, predicate: P) -> TryFilter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    TryFilter { source: Some(source.into_iter()), predicate }
}

// ------------- Filter -------------
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    /// Gives back the source, positioned after the last element examined.
    pub fn into_source(self) -> I {
        self.source
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(item) = self.source.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every remaining element may be rejected
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("source", &self.source).finish_non_exhaustive()
    }
}

// ------------- TryFilter -------------
pub struct TryFilter<I, P> {
    // None once a predicate failure has been handed out
    source: Option<I>,
    predicate: P,
}

impl<I, P> TryFilter<I, P> {
    /// True after a predicate failure has aborted the iteration.
    pub fn is_aborted(&self) -> bool {
        self.source.is_none()
    }
}

impl<I, P, E> Iterator for TryFilter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;
        while let Some(item) = source.next() {
            match (self.predicate)(&item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(e) => {
                    self.source = None;
                    return Some(Err(e));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, P, E> FusedIterator for TryFilter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
}

impl<I: fmt::Debug, P> fmt::Debug for TryFilter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFilter").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Method-call form of [`filter`] and [`try_filter`] for any iterator.
pub trait LazyFilter: Iterator + Sized {
    fn lazy_filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    fn try_lazy_filter<P, E>(self, predicate: P) -> TryFilter<Self, P>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        try_filter(self, predicate)
    }
}

impl<I: Iterator> LazyFilter for I {}
