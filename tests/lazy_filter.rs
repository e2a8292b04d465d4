use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use strainer::filter::{filter, try_filter, LazyFilter};

#[test]
fn keeps_matching_elements_in_order() {
    let evens: Vec<i32> = filter([1, 2, 3, 4, 5], |n| n % 2 == 0).collect();
    assert_eq!(evens, vec![2, 4]);
    let words: Vec<&str> = filter(vec!["b", "a", "c", "a"], |w| *w != "c").collect();
    assert_eq!(words, vec!["b", "a", "a"], "relative order and duplicates preserved");
}

#[test]
fn always_true_and_always_false() {
    let source = vec![5, 3, 9, 1];
    let all: Vec<i32> = filter(source.clone(), |_| true).collect();
    assert_eq!(all, source);
    let none: Vec<i32> = filter(source, |_| false).collect();
    assert!(none.is_empty());
    assert_eq!(filter(Vec::<i32>::new(), |_| true).next(), None);
}

#[test]
fn nothing_evaluated_before_demand() {
    let calls = Cell::new(0);
    let mut evens = filter(1.., |n: &u64| {
        calls.set(calls.get() + 1);
        n % 2 == 0
    });
    assert_eq!(calls.get(), 0, "construction must not touch the source");
    assert_eq!(evens.next(), Some(2));
    assert_eq!(calls.get(), 2);
    assert_eq!(evens.next(), Some(4));
    assert_eq!(calls.get(), 4);
}

#[test]
fn infinite_source_consumed_only_as_far_as_needed() {
    let pulled = Cell::new(0u64);
    let naturals = (1u64..).inspect(|_| pulled.set(pulled.get() + 1));
    let multiples: Vec<u64> = naturals.lazy_filter(|n| n % 10 == 0).take(3).collect();
    assert_eq!(multiples, vec![10, 20, 30]);
    assert_eq!(pulled.get(), 30, "no element past the third match was produced");
}

#[test]
fn predicate_called_at_most_once_per_element() {
    let mut seen = Vec::new();
    let kept: Vec<i32> = filter([3, 1, 4, 1, 5], |n| {
        seen.push(*n);
        *n > 2
    })
    .collect();
    assert_eq!(kept, vec![3, 4, 5]);
    assert_eq!(seen, vec![3, 1, 4, 1, 5], "each element examined once, in order");
}

#[test]
fn single_pass_then_fresh_invocation() {
    let source = vec![1, 2, 3, 4];
    let mut odd = filter(source.iter(), |n| *n % 2 == 1);
    assert_eq!(odd.by_ref().count(), 2);
    assert_eq!(odd.next(), None, "an exhausted filter stays exhausted");
    // a second pass is a second call
    assert_eq!(filter(source.iter(), |n| *n % 2 == 1).count(), 2);
}

#[test]
fn remaining_source_can_be_recovered() {
    let mut big = filter(1..=10, |n| *n > 3);
    assert_eq!(big.next(), Some(4));
    let rest: Vec<i32> = big.into_source().collect();
    assert_eq!(rest, vec![5, 6, 7, 8, 9, 10]);
}

#[test]
fn size_hint_has_no_lower_bound() {
    let f = filter([1, 2, 3], |_| true);
    assert_eq!(f.size_hint(), (0, Some(3)));
    let g = filter(0u8.., |_| true);
    assert_eq!(g.size_hint().0, 0);
}

#[test]
#[should_panic(expected = "bad element")]
fn panicking_predicate_propagates() {
    let _: Vec<i32> = filter([1, 2, 3], |n| if *n == 2 { panic!("bad element") } else { true }).collect();
}

#[test]
fn panic_surfaces_at_the_failing_element() {
    let mut f = filter([1, 2, 3], |n| if *n == 2 { panic!("bad element") } else { true });
    assert_eq!(f.next(), Some(1), "elements before the failure are delivered");
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| f.next()));
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"bad element"), "the predicate's own failure is raised");
}

#[test]
fn try_filter_stops_at_first_failure() {
    let mut f = try_filter([1, 2, 3, 4, 5], |n| if *n == 4 { Err(format!("cannot judge {n}")) } else { Ok(n % 2 == 1) });
    assert_eq!(f.next(), Some(Ok(1)));
    assert_eq!(f.next(), Some(Ok(3)));
    assert!(!f.is_aborted());
    assert_eq!(f.next(), Some(Err("cannot judge 4".to_string())));
    assert!(f.is_aborted());
    assert_eq!(f.next(), None, "iteration aborted at the failing element");
}

#[test]
fn try_filter_collects_into_result() {
    let ok: Result<Vec<u32>, String> = (1u32..=6).try_lazy_filter(|n| Ok::<_, String>(n % 3 == 0)).collect();
    assert_eq!(ok, Ok(vec![3, 6]));
    let failed: Result<Vec<u32>, &str> = (1u32..).try_lazy_filter(|n| if *n > 4 { Err("too big") } else { Ok(true) }).collect();
    assert_eq!(failed, Err("too big"), "no partial result on failure");
}
