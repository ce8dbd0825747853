// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Integration tests for the binary min-heap.
//!
//! Random workloads check that the ordering invariant holds through long
//! push/pop sequences and that a heap drains in the same order a plain sort
//! would produce.

mod common;

use classic_collections::heap::MinHeap;
use common::{random_values, rng, shuffled_range};
use rand::Rng;

/// Every parent must be no larger than its children.
fn assert_heap_property(heap: &MinHeap<i64>) {
    let data = heap.contents();
    for i in 1..data.len() {
        assert!(
            data[(i - 1) / 2] <= data[i],
            "heap property violated at index {}",
            i
        );
    }
}

#[test]
fn test_heapsort_agrees_with_sort() {
    for seed in 0..5 {
        let values = random_values(seed, 300, 50);
        let mut expected = values.clone();
        expected.sort_unstable();
        assert_eq!(MinHeap::from_vec(values).into_sorted_vec(), expected);
    }
}

#[test]
fn test_incremental_build_matches_floyd_build() {
    let values = shuffled_range(11, 500);
    let pushed: MinHeap<i64> = values.iter().copied().collect();
    let built = MinHeap::from_vec(values);
    assert_heap_property(&pushed);
    assert_heap_property(&built);
    // Array layouts may differ, but both must drain identically
    assert_eq!(pushed.into_sorted_vec(), built.into_sorted_vec());
}

#[test]
fn test_mixed_push_pop_workload() {
    let mut rng = rng(99);
    let mut heap = MinHeap::new();
    let mut shadow: Vec<i64> = Vec::new();

    for _ in 0..2000 {
        if shadow.is_empty() || rng.gen_bool(0.6) {
            let v = rng.gen_range(0..1000);
            heap.push(v);
            shadow.push(v);
        } else {
            let popped = heap.pop();
            shadow.sort_unstable();
            assert_eq!(popped, Some(shadow.remove(0)));
        }
        assert_eq!(heap.len(), shadow.len());
        assert_heap_property(&heap);
    }
}

#[test]
fn test_peek_tracks_minimum() {
    let mut heap = MinHeap::new();
    let mut min = i64::MAX;
    for v in random_values(3, 200, 10_000) {
        min = min.min(v);
        heap.push(v);
        assert_eq!(heap.peek(), Some(&min));
    }
}
