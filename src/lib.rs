// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Classic data structures and comparison sorts in idiomatic Rust.
//!
//! Each module is an independent, self-contained implementation of a
//! textbook structure or algorithm. Nothing here shares state with anything
//! else; the crate is a collection, not a system.
//!
//! # Modules
//!
//! - [`list`] - Doubly-linked list with deep-copy `Clone` and indexed access
//! - [`heap`] - Binary min-heap with percolate up/down and Floyd heapify
//! - [`avl`] - AVL self-balancing binary search tree
//! - [`hash`] - Hash tables: separate chaining, and linear probing with
//!   lazy deletion
//! - [`sort`] - Insertion, merge, and quick sort, instrumented with
//!   comparison and move counts
//!
//! # Example
//!
//! ```
//! use classic_collections::avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for v in [50, 25, 75, 10, 30] {
//!     tree.insert(v);
//! }
//! assert!(tree.contains(&30));
//! assert_eq!(tree.height(), 2);
//! ```

pub mod avl;
pub mod hash;
pub mod heap;
pub mod list;
pub mod sort;

// Re-export commonly used types
pub use avl::AvlTree;
pub use hash::{ChainingHash, ProbingHash, Table};
pub use heap::MinHeap;
pub use list::LinkedList;
pub use sort::{insertion_sort, merge_sort, quick_sort, SortStats};
