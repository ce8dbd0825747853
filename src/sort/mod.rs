// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Comparison sorts instrumented with operation counts.
//!
//! Each sort takes a mutable slice, sorts it ascending, and returns a
//! [`SortStats`] describing the work done: how many element comparisons and
//! element moves the algorithm performed, and how long it ran. The counts are
//! deterministic for a given input, so they can be tabulated against the
//! expected Big-O growth curves.
//!
//! What counts as a "move" differs per algorithm and is documented on each
//! sort function.
//!
//! # Example
//!
//! ```
//! use classic_collections::sort::{insertion_sort, Op};
//!
//! let mut data = vec![3, 1, 2];
//! let stats = insertion_sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3]);
//! assert!(stats.get(Op::Comparisons) >= 2);
//! ```

pub mod insertion;
pub mod merge;
pub mod quick;
pub mod stats;

pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use stats::{Op, SortStats};
