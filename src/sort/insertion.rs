// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Instrumented insertion sort.

use crate::sort::stats::{Op, SortStats};
use std::time::Instant;

/// Sort `a` ascending by insertion sort, counting operations.
///
/// Each key comparison is charged one comparison; each element shifted one
/// slot to the right is charged one move. An already-sorted slice therefore
/// costs exactly `n - 1` comparisons and zero moves.
///
/// # Example
///
/// ```
/// use classic_collections::sort::{insertion_sort, Op};
///
/// let mut data = vec![5, 2, 4, 6, 1, 3];
/// let stats = insertion_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
/// assert!(stats.get(Op::Moves) > 0);
/// ```
pub fn insertion_sort<T: Ord>(a: &mut [T]) -> SortStats {
    let mut stats = SortStats::new();
    let start = Instant::now();

    for i in 1..a.len() {
        let mut j = i;
        while j > 0 {
            stats.record(Op::Comparisons);
            if a[j] < a[j - 1] {
                // Shift a[j-1] one slot right, carrying the key with it
                a.swap(j, j - 1);
                stats.record(Op::Moves);
                j -= 1;
            } else {
                break;
            }
        }
    }

    stats.elapsed = start.elapsed();
    stats
}
