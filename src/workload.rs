//! Busy loops whose cost grows with the iteration count, for timing.

use std::hint::black_box;

pub fn count_to(iterations: u64) {
    let mut i = 0u64;
    while black_box(i) < iterations {
        i += 1;
    }
}

/// Counts like [`count_to`], then hands back a fixed answer.
pub fn calculate_some_result(iterations: u64) -> i32 {
    count_to(iterations);
    63
}
