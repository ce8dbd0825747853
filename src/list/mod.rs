// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Doubly-linked list with indexed access and deep-copy semantics.
//!
//! Nodes are heap-allocated and linked both ways with raw `NonNull`
//! pointers. On top of the usual deque operations the list supports indexed
//! access (`get`, `set`, `insert`, `remove`), accelerated by a cursor that
//! remembers the last accessed position: walking to an index starts from
//! whichever of head, tail, or the cursor is closest, so sweeping through
//! nearby indices does not re-walk the list from the front each time.
//!
//! Copying is explicit and deep: `Clone` allocates a fresh node per element.
//! Moving is ordinary Rust ownership transfer; unlike the C++ rendition of
//! this structure there is no moved-from object left behind to reset.
//!
//! # Pointer Safety
//!
//! All nodes are owned exclusively by the list that allocated them:
//! - Every node is created by `Box::into_raw` in a push or insert and freed
//!   by exactly one `Box::from_raw` in a pop, remove, or drop.
//! - `head`, `tail`, and the cursor only ever point at live nodes of this
//!   list; the cursor is cleared by every operation that unlinks a node or
//!   shifts indices.
//! - Borrows handed out (`get`, `iter`) tie their lifetime to the list
//!   borrow, so no reference outlives the nodes.
//!
//! # Example
//!
//! ```
//! use classic_collections::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! list.insert(1, 10).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 10, 2, 3]);
//!
//! let copy = list.clone(); // deep copy
//! assert_eq!(list, copy);
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use thiserror::Error;

/// Errors from indexed list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// The index was outside the valid range for the operation.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

struct Node<T> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

/// A doubly-linked list.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    /// Last accessed (index, node); a walk anchor, never load-bearing.
    /// In a `Cell` so shared reads can refresh it too.
    cursor: Cell<Option<(usize, NonNull<Node<T>>)>>,
    /// The list logically owns `Node<T>` allocations.
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            cursor: Cell::new(None),
            marker: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: head points at a live node owned by this list
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail points at a live node owned by this list
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Prepend an element.
    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate(value, None, self.head);
        // SAFETY: old head (if any) is live; linking back to the new node
        unsafe {
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.head = Some(node);
        self.len += 1;
        self.cursor.set(None); // every index shifted by one
    }

    /// Append an element.
    pub fn push_back(&mut self, value: T) {
        let node = Self::allocate(value, self.tail, None);
        // SAFETY: old tail (if any) is live; linking forward to the new node
        unsafe {
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
        // Existing indices are unchanged, so the cursor stays valid
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: reclaiming the box allocated in push/insert; head is live
        // and after unlinking nothing points at it
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            // SAFETY: the successor is live
            Some(new_head) => unsafe { (*new_head.as_ptr()).prev = None },
            None => self.tail = None,
        }
        self.len -= 1;
        self.cursor.set(None);
        Some(node.value)
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: as in pop_front, mirrored
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        self.tail = node.prev;
        match self.tail {
            // SAFETY: the predecessor is live
            Some(new_tail) => unsafe { (*new_tail.as_ptr()).next = None },
            None => self.head = None,
        }
        self.len -= 1;
        self.cursor.set(None);
        Some(node.value)
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let node = self.node_at(index);
        // SAFETY: node_at returns a live node
        Some(unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable element at `index`, updating the cursor.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let node = self.node_at(index);
        // SAFETY: node_at returns a live node; &mut self gives exclusivity
        Some(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Replace the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let node = self.node_at(index);
        // SAFETY: live node, exclusive access through &mut self
        Ok(unsafe { mem::replace(&mut (*node.as_ptr()).value, value) })
    }

    /// Insert an element at `index`, shifting the suffix right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            // Splice before the node currently at `index`
            let after = self.node_at(index);
            // SAFETY: `after` is interior (index in 1..len), so it has a
            // predecessor; both neighbors are live
            unsafe {
                let before = (*after.as_ptr()).prev.expect("interior node has a predecessor");
                let node = Self::allocate(value, Some(before), Some(after));
                (*before.as_ptr()).next = Some(node);
                (*after.as_ptr()).prev = Some(node);
            }
            self.len += 1;
            self.cursor.set(None);
        }
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(self.pop_front().expect("index in bounds implies non-empty"));
        }
        if index == self.len - 1 {
            return Ok(self.pop_back().expect("index in bounds implies non-empty"));
        }
        let target = self.node_at(index);
        self.cursor.set(None);
        // SAFETY: target is interior, so both neighbors exist and are live;
        // from_raw reclaims the unlinked node exactly once
        unsafe {
            let node = Box::from_raw(target.as_ptr());
            let before = node.prev.expect("interior node has a predecessor");
            let after = node.next.expect("interior node has a successor");
            (*before.as_ptr()).next = Some(after);
            (*after.as_ptr()).prev = Some(before);
            self.len -= 1;
            Ok(node.value)
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    fn allocate(
        value: T,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) -> NonNull<Node<T>> {
        let raw = Box::into_raw(Box::new(Node { value, prev, next }));
        // SAFETY: Box::into_raw never returns null
        unsafe { NonNull::new_unchecked(raw) }
    }

    /// Node at `index`, walking from the nearest of head, tail, or cursor,
    /// and leaving the cursor on the node found.
    ///
    /// Callers must ensure `index < self.len`.
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len);

        let mut anchor_pos = 0;
        let mut anchor = self.head.expect("index in bounds implies non-empty");
        let mut distance = index;

        let from_tail = self.len - 1 - index;
        if from_tail < distance {
            anchor_pos = self.len - 1;
            anchor = self.tail.expect("non-empty list has a tail");
            distance = from_tail;
        }
        if let Some((pos, node)) = self.cursor.get() {
            if pos.abs_diff(index) < distance {
                anchor_pos = pos;
                anchor = node;
            }
        }

        let mut node = anchor;
        let mut pos = anchor_pos;
        // SAFETY: every traversed node is live and the prev/next links are
        // consistent with the indices, so the walk stays in bounds
        unsafe {
            while pos < index {
                node = (*node.as_ptr()).next.expect("next link within bounds");
                pos += 1;
            }
            while pos > index {
                node = (*node.as_ptr()).prev.expect("prev link within bounds");
                pos -= 1;
            }
        }
        self.cursor.set(Some((index, node)));
        node
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Deep copy: every element is cloned into a freshly allocated node.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing front-to-back iterator.
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next?;
        // SAFETY: the node is live for 'a; remaining bounds the walk to the
        // list's own nodes
        unsafe {
            self.next = (*node.as_ptr()).next;
            self.remaining -= 1;
            Some(&(*node.as_ptr()).value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; drains front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_vec(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    /// Walk the links both ways and check they agree with len.
    fn check_links<T>(list: &LinkedList<T>) {
        let mut forward = 0;
        let mut node = list.head;
        let mut last = None;
        while let Some(n) = node {
            unsafe {
                assert_eq!((*n.as_ptr()).prev, last, "prev link inconsistent");
                last = Some(n);
                node = (*n.as_ptr()).next;
            }
            forward += 1;
        }
        assert_eq!(forward, list.len, "len does not match reachable nodes");
        assert_eq!(list.tail, last, "tail does not match last node");
    }

    #[test]
    fn test_new_is_empty() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_pop_both_ends() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        check_links(&list);
        assert_eq!(as_vec(&list), vec![1, 2, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        check_links(&list);
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        check_links(&list);
    }

    #[test]
    fn test_get_and_set() {
        let mut list: LinkedList<i32> = (0..10).collect();
        assert_eq!(list.get(0), Some(&0));
        assert_eq!(list.get(9), Some(&9));
        assert_eq!(list.get(10), None);

        assert_eq!(list.set(4, 40), Ok(4));
        assert_eq!(list.get(4), Some(&40));
        assert_eq!(
            list.set(10, 0),
            Err(ListError::IndexOutOfBounds { index: 10, len: 10 })
        );
    }

    #[test]
    fn test_cursor_sweep() {
        // Sequential access exercises the cursor anchor repeatedly
        let mut list: LinkedList<i32> = (0..100).collect();
        for i in 0..100 {
            assert_eq!(list.get_mut(i), Some(&mut (i as i32)));
        }
        for i in (0..100).rev() {
            assert_eq!(list.get_mut(i), Some(&mut (i as i32)));
        }
    }

    #[test]
    fn test_insert_positions() {
        let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
        list.insert(1, 2).unwrap(); // middle
        list.insert(0, 0).unwrap(); // front
        list.insert(4, 4).unwrap(); // == len, appends
        check_links(&list);
        assert_eq!(as_vec(&list), vec![0, 1, 2, 3, 4]);

        assert_eq!(
            list.insert(6, 9),
            Err(ListError::IndexOutOfBounds { index: 6, len: 5 })
        );
    }

    #[test]
    fn test_remove_positions() {
        let mut list: LinkedList<i32> = (0..5).collect();
        assert_eq!(list.remove(2), Ok(2)); // middle
        check_links(&list);
        assert_eq!(list.remove(0), Ok(0)); // front
        assert_eq!(list.remove(2), Ok(4)); // back
        check_links(&list);
        assert_eq!(as_vec(&list), vec![1, 3]);

        assert_eq!(
            list.remove(2),
            Err(ListError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_mutation_after_cached_access() {
        // The cursor must not survive a structural change it could dangle on
        let mut list: LinkedList<i32> = (0..10).collect();
        list.get_mut(7); // cursor at 7
        assert_eq!(list.remove(7), Ok(7));
        check_links(&list);
        assert_eq!(list.get(7), Some(&8));
        list.get_mut(3); // cursor at 3
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.get(3), Some(&5));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original: LinkedList<i32> = (0..5).collect();
        let copy = original.clone();
        original.set(0, 99).unwrap();
        original.pop_back();
        assert_eq!(as_vec(&copy), vec![0, 1, 2, 3, 4]);
        assert_eq!(copy.len(), 5);
        check_links(&copy);
    }

    #[test]
    fn test_move_transfers_ownership() {
        let original: LinkedList<i32> = (0..3).collect();
        let moved = original; // plain Rust move; no deep copy
        assert_eq!(as_vec(&moved), vec![0, 1, 2]);
    }

    #[test]
    fn test_equality() {
        let a: LinkedList<i32> = (0..4).collect();
        let b: LinkedList<i32> = (0..4).collect();
        let c: LinkedList<i32> = (0..5).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_iter_drains() {
        let list: LinkedList<i32> = (0..4).collect();
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut list: LinkedList<i32> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        check_links(&list);
        list.push_back(1);
        assert_eq!(as_vec(&list), vec![1]);
    }

    #[test]
    fn test_drop_frees_every_node() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        {
            let mut list = LinkedList::new();
            for _ in 0..8 {
                list.push_back(Counted(Rc::clone(&drops)));
            }
        }
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn test_debug_format() {
        let list: LinkedList<i32> = (1..=3).collect();
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
