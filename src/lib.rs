//! Strainer – lazy filtering and wall-clock timing over caller-supplied functions.
//!
//! Everything in this crate is a thin wrapper around behaviour passed in as
//! a value: a predicate deciding which elements of a sequence to keep, or an
//! operation whose running time should be measured.
//!
//! ## Modules
//! * [`filter`] – [`filter::filter`] and [`filter::try_filter`], lazy and
//!   forward-only adapters over any iterable source.
//! * [`timing`] – [`timing::measure_void`], [`timing::measure_value`] and
//!   [`timing::measure_result`], built on a small [`timing::Stopwatch`].
//! * [`predicate`] – combinators producing new predicates from old ones,
//!   including regular expression matching.
//! * [`ops`] – binary operations as function values.
//! * [`hero`] – the [`hero::Hero`] record used by the demo and its rosters.
//! * [`workload`] – deterministic busy loops to have something to time.
//! * [`settings`] – settings of the `strainer` binary.
//!
//! ## Laziness
//! A filter does no work until asked for its next element, and then only
//! as much as it takes to find it. Filtering an infinite source is fine as
//! long as the consumer stops asking:
//! ```
//! use strainer::filter::LazyFilter;
//! let first: Vec<u64> = (1u64..).lazy_filter(|n| n % 7 == 0).take(3).collect();
//! assert_eq!(first, vec![7, 14, 21]);
//! ```
//!
//! ## Failures
//! Neither filters nor the timing harness catch anything. A panicking
//! predicate or operation unwinds through them. Fallible predicates and
//! operations (returning `Result`) get their error back unchanged, and a
//! failed operation yields no duration.
//!
//! ## Quick Start
//! ```
//! use strainer::{filter::filter, hero::{default_roster, names}, timing::measure_value};
//! let roster = default_roster();
//! let (fliers, elapsed) = measure_value(|| names(filter(&roster, |h| h.can_fly())));
//! assert_eq!(fliers, "Homelander, Stormfront");
//! assert!(elapsed.as_secs() < 60);
//! ```

pub mod error;
pub mod filter;
pub mod hero;
pub mod ops;
pub mod predicate;
pub mod settings;
pub mod timing;
pub mod workload;

pub use error::{Result, StrainerError};
