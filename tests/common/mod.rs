// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Common test utilities shared across integration tests.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Deterministic RNG so failures reproduce across runs.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` random values in `0..bound`, duplicates likely.
pub fn random_values(seed: u64, n: usize, bound: i64) -> Vec<i64> {
    let mut rng = rng(seed);
    (0..n).map(|_| rng.gen_range(0..bound)).collect()
}

/// A shuffled permutation of `0..n`, so every value is distinct.
pub fn shuffled_range(seed: u64, n: i64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n).collect();
    values.shuffle(&mut rng(seed));
    values
}

/// Assert a slice is in non-decreasing order.
pub fn assert_sorted<T: Ord + std::fmt::Debug>(values: &[T]) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "out of order: {:?} > {:?}", pair[0], pair[1]);
    }
}
