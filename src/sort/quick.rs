// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Instrumented quicksort with median-of-three pivot selection.

use crate::sort::stats::{Op, SortStats};
use std::time::Instant;

/// Sort `a` ascending by quicksort, counting operations.
///
/// The pivot is the median of the first, middle, and last elements, which
/// defeats the classic quadratic blowup on already-sorted input. Each swap is
/// charged two moves; each ordering test is charged one comparison.
///
/// # Example
///
/// ```
/// use classic_collections::sort::quick_sort;
///
/// let mut data = vec![10, 80, 30, 90, 40, 50, 70];
/// quick_sort(&mut data);
/// assert_eq!(data, vec![10, 30, 40, 50, 70, 80, 90]);
/// ```
pub fn quick_sort<T: Ord>(a: &mut [T]) -> SortStats {
    let mut stats = SortStats::new();
    let start = Instant::now();

    sort_recursive(a, &mut stats);

    stats.elapsed = start.elapsed();
    stats
}

fn sort_recursive<T: Ord>(a: &mut [T], stats: &mut SortStats) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    if n == 2 {
        order_pair(a, 0, 1, stats);
        return;
    }

    // Median-of-three: leaves a[0] <= a[mid] <= a[n-1], so the ends act as
    // sentinels for the partition scans below.
    let mid = n / 2;
    order_pair(a, 0, mid, stats);
    order_pair(a, 0, n - 1, stats);
    order_pair(a, mid, n - 1, stats);
    if n == 3 {
        return;
    }

    let pivot_final = partition(a, mid, stats);

    let (left, rest) = a.split_at_mut(pivot_final);
    sort_recursive(left, stats);
    sort_recursive(&mut rest[1..], stats);
}

/// Partition `a` around the median value currently at `mid`.
///
/// The pivot is parked at `a[n-2]`, the interior is partitioned with inward
/// scans, then the pivot is swapped back to its final position, which is
/// returned. Requires `a[0] <= pivot <= a[n-1]` (established by the caller).
fn partition<T: Ord>(a: &mut [T], mid: usize, stats: &mut SortStats) -> usize {
    let hi = a.len() - 1;
    let pivot = hi - 1;

    a.swap(mid, pivot);
    stats.record_many(Op::Moves, 2);

    let mut i = 0;
    let mut j = pivot;
    loop {
        // Scan right for an element >= pivot; a[pivot] itself is the backstop
        i += 1;
        while {
            stats.record(Op::Comparisons);
            a[i] < a[pivot]
        } {
            i += 1;
        }
        // Scan left for an element <= pivot; a[0] is the backstop
        j -= 1;
        while {
            stats.record(Op::Comparisons);
            a[pivot] < a[j]
        } {
            j -= 1;
        }

        if i >= j {
            break;
        }
        a.swap(i, j);
        stats.record_many(Op::Moves, 2);
    }

    // Restore the pivot between the partitions
    a.swap(i, pivot);
    stats.record_many(Op::Moves, 2);
    i
}

/// Order `a[lo] <= a[hi]`, counting one comparison and a possible swap.
fn order_pair<T: Ord>(a: &mut [T], lo: usize, hi: usize, stats: &mut SortStats) {
    stats.record(Op::Comparisons);
    if a[hi] < a[lo] {
        a.swap(lo, hi);
        stats.record_many(Op::Moves, 2);
    }
}
