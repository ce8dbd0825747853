// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Instrumented top-down merge sort.

use crate::sort::stats::{Op, SortStats};
use std::time::Instant;

/// Sort `a` ascending by top-down merge sort, counting operations.
///
/// Uses one auxiliary buffer the size of the input, allocated once. Every
/// element copied into the buffer and every element copied back out is
/// charged one move; each ordering decision during a merge is charged one
/// comparison. The merge is stable: on ties the left half wins.
///
/// # Example
///
/// ```
/// use classic_collections::sort::merge_sort;
///
/// let mut data = vec![38, 27, 43, 3, 9, 82, 10];
/// merge_sort(&mut data);
/// assert_eq!(data, vec![3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(a: &mut [T]) -> SortStats {
    let mut stats = SortStats::new();
    let start = Instant::now();

    if a.len() > 1 {
        // Single allocation; recursion reuses matching sub-slices of it
        let mut aux = a.to_vec();
        sort_with_aux(a, &mut aux, &mut stats);
    }

    stats.elapsed = start.elapsed();
    stats
}

fn sort_with_aux<T: Ord + Clone>(a: &mut [T], aux: &mut [T], stats: &mut SortStats) {
    if a.len() <= 1 {
        return;
    }
    let mid = a.len() / 2;
    {
        let (left, right) = a.split_at_mut(mid);
        let (aux_left, aux_right) = aux.split_at_mut(mid);
        sort_with_aux(left, aux_left, stats);
        sort_with_aux(right, aux_right, stats);
    }
    merge_halves(a, aux, mid, stats);
}

/// Merge the sorted halves `a[..mid]` and `a[mid..]` through `aux`.
fn merge_halves<T: Ord + Clone>(a: &mut [T], aux: &mut [T], mid: usize, stats: &mut SortStats) {
    let n = a.len();

    aux.clone_from_slice(a);
    stats.record_many(Op::Moves, n as u64);

    let mut i = 0; // cursor into the left run
    let mut j = mid; // cursor into the right run
    for k in 0..n {
        let take_right = if i >= mid {
            true
        } else if j >= n {
            false
        } else {
            stats.record(Op::Comparisons);
            // Strict: ties take the left element, keeping the sort stable
            aux[j] < aux[i]
        };

        if take_right {
            a[k] = aux[j].clone();
            j += 1;
        } else {
            a[k] = aux[i].clone();
            i += 1;
        }
        stats.record(Op::Moves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: Vec<i32> = vec![];
        let stats = merge_sort(&mut empty);
        assert_eq!(stats.moves(), 0);

        let mut one = vec![9];
        let stats = merge_sort(&mut one);
        assert_eq!(one, vec![9]);
        assert_eq!(stats.moves(), 0);
    }

    #[test]
    fn test_sorts_reverse_input() {
        let mut data: Vec<i32> = (0..64).rev().collect();
        merge_sort(&mut data);
        assert_eq!(data, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_elements_move_count() {
        // One merge of a 2-slice: 2 moves in, 2 moves out, 1 comparison
        let mut data = vec![2, 1];
        let stats = merge_sort(&mut data);
        assert_eq!(data, vec![1, 2]);
        assert_eq!(stats.comparisons(), 1);
        assert_eq!(stats.moves(), 4);
    }

    #[test]
    fn test_nlogn_comparison_bound() {
        let n = 256usize;
        let mut data: Vec<i32> = (0..n as i32).rev().collect();
        let stats = merge_sort(&mut data);
        // At most n * ceil(log2 n) comparisons
        assert!(stats.comparisons() <= (n * 8) as u64);
    }

    #[test]
    fn test_stability() {
        // Sort pairs by first component only; second component tags input order
        #[derive(Clone, PartialEq, Eq, Debug)]
        struct Tagged(u32, usize);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut data = vec![Tagged(1, 0), Tagged(0, 1), Tagged(1, 2), Tagged(0, 3)];
        merge_sort(&mut data);
        assert_eq!(
            data,
            vec![Tagged(0, 1), Tagged(0, 3), Tagged(1, 0), Tagged(1, 2)]
        );
    }
}
