// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Binary min-heap backed by a `Vec`, 0-indexed.
//!
//! The heap keeps the smallest element at the root (`data[0]`). For an
//! element at index `i`, the parent lives at `(i - 1) / 2` and the children
//! at `2i + 1` and `2i + 2`.
//!
//! The ordering invariant is `data[parent(i)] <= data[i]` for every `i > 0`.
//! It is restored after `push` by percolating the new element up, and after
//! `pop` by moving the last element to the root and percolating it down.
//! Building from an unsorted vector uses Floyd's heapify: percolate down
//! every non-leaf, last parent first.
//!
//! # Example
//!
//! ```
//! use classic_collections::heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![9, 4, 7, 1, 8]);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.len(), 3);
//! ```

use std::fmt;
use thiserror::Error;

/// Errors from checked heap accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    /// The heap had no elements for an operation that requires one.
    #[error("{operation}() called on an empty heap")]
    Empty { operation: &'static str },
}

/// A binary min-heap.
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Build a heap from an unsorted vector in O(n) (Floyd heapify).
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.build_heap();
        heap
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Add an element, then restore the heap property upward from it.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.percolate_up(self.data.len() - 1);
    }

    /// The smallest element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The smallest element, or an error on an empty heap.
    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.data
            .first()
            .ok_or(HeapError::Empty { operation: "peek" })
    }

    /// Remove and return the smallest element.
    ///
    /// The last element replaces the root and percolates down. Popping a
    /// singleton leaves an empty heap without any percolation.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.percolate_down(0);
        }
        min
    }

    /// Drain the heap in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Restore the heap property from unsorted backing data.
    fn build_heap(&mut self) {
        let n = self.data.len();
        if n < 2 {
            return;
        }
        // Last non-leaf is the parent of the final element
        for i in (0..=(n - 2) / 2).rev() {
            self.percolate_down(i);
        }
    }

    /// Sift the element at `index` up until its parent is no larger.
    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] <= self.data[index] {
                break;
            }
            self.data.swap(parent, index);
            index = parent;
        }
    }

    /// Sift the element at `index` down until both children are no smaller.
    fn percolate_down(&mut self, mut index: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < n && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < n && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord + Clone> MinHeap<T> {
    /// A copied snapshot of the backing vector, in array order.
    ///
    /// The copy means callers cannot disturb the heap property through it.
    pub fn contents(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord + fmt::Display> fmt::Display for MinHeap<T> {
    /// Render the backing array in index order, space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_property(heap: &MinHeap<i32>) {
        let data = heap.contents();
        for i in 1..data.len() {
            assert!(
                data[(i - 1) / 2] <= data[i],
                "heap property violated at index {}: {:?}",
                i,
                data
            );
        }
    }

    #[test]
    fn test_new_is_empty() {
        let heap: MinHeap<i32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn test_push_keeps_min_at_root() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 8, 1, 9, 2] {
            heap.push(v);
            assert_heap_property(&heap);
        }
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn test_pop_ascending() {
        let mut heap = MinHeap::from_vec(vec![7, 3, 9, 1, 5]);
        let mut drained = Vec::new();
        while let Some(v) = heap.pop() {
            drained.push(v);
            assert_heap_property(&heap);
        }
        assert_eq!(drained, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_pop_empty_and_singleton() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.pop(), None);

        heap.push(4);
        assert_eq!(heap.pop(), Some(4));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_try_peek_empty() {
        let heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(
            heap.try_peek(),
            Err(HeapError::Empty { operation: "peek" })
        );
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = MinHeap::from_vec(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_heap_property(&heap);
        assert_eq!(heap.peek(), Some(&0));
    }

    #[test]
    fn test_from_vec_trivial_sizes() {
        let empty: MinHeap<i32> = MinHeap::from_vec(vec![]);
        assert!(empty.is_empty());

        let one = MinHeap::from_vec(vec![3]);
        assert_eq!(one.peek(), Some(&3));
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = MinHeap::from_vec(vec![4, 1, 3, 2]);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinHeap::from_vec(vec![2, 2, 1, 1, 3]);
        assert_heap_property(&heap);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
    }

    #[test]
    fn test_display_array_order() {
        let mut heap = MinHeap::new();
        heap.push(2);
        heap.push(1);
        heap.push(3);
        // After percolation: root 1, then 2 and 3
        assert_eq!(format!("{}", heap), "1 2 3");
    }
}
