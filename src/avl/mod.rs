// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! AVL self-balancing binary search tree.
//!
//! Nodes cache their subtree height; after every insertion or removal the
//! tree rebalances on the way back up the recursion with single or double
//! rotations, keeping the height difference between siblings at most one.
//!
//! Height follows the classic convention: a missing subtree has height -1,
//! a leaf has height 0, and the empty tree reports -1.
//!
//! Duplicates are ignored on insert (strict BST: each value appears at most
//! once).
//!
//! # Example
//!
//! ```
//! use classic_collections::avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! // Ascending insertion would be a worst case for a plain BST
//! for v in 0..7 {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.height(), 2); // perfectly balanced
//! assert_eq!(tree.min(), Some(&0));
//! assert_eq!(tree.max(), Some(&6));
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug, Clone)]
struct AvlNode<T> {
    value: T,
    /// Cached height of the subtree rooted here (leaf = 0).
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> AvlNode<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 0,
            left: None,
            right: None,
        })
    }
}

/// An AVL tree of unique values.
#[derive(Debug, Clone, Default)]
pub struct AvlTree<T: Ord> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Insert a value, rebalancing as needed.
    ///
    /// Returns `true` if the value was inserted, `false` if it was already
    /// present (duplicates are ignored).
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert_node(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove a value, rebalancing as needed.
    ///
    /// Returns `true` if the value was present and removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = remove_node(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether the value is present.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// The smallest value, or `None` on an empty tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value, or `None` on an empty tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Iterate the tree in preorder (node, left subtree, right subtree).
    ///
    /// This is the traversal order the course grading harness prints.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Collect the preorder traversal into a vector of references.
    pub fn pre_order_vec(&self) -> Vec<&T> {
        self.pre_order().collect()
    }
}

/// Height of a possibly-missing subtree (-1 for `None`).
fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

fn update_height<T>(node: &mut AvlNode<T>) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

fn insert_node<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    let inserted = match link {
        None => {
            *link = Some(AvlNode::new(value));
            return true; // a fresh leaf is balanced by construction
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_node(&mut node.left, value),
            Ordering::Greater => insert_node(&mut node.right, value),
            Ordering::Equal => false,
        },
    };
    if inserted {
        rebalance(link);
    }
    inserted
}

fn remove_node<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let removed = match link {
        None => false,
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => remove_node(&mut node.left, value),
            Ordering::Greater => remove_node(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // Two children: adopt the smallest value of the right
                    // subtree, which take_min removes and rebalances
                    node.value = take_min(&mut node.right);
                } else {
                    // Zero or one child: splice the child (if any) in place
                    let node = link.take().expect("matched Some above");
                    *link = node.left.or(node.right);
                }
                true
            }
        },
    };
    if removed {
        rebalance(link);
    }
    removed
}

/// Detach and return the minimum value of a non-empty subtree,
/// rebalancing the path it was removed from.
fn take_min<T: Ord>(link: &mut Link<T>) -> T {
    let has_left = link
        .as_ref()
        .map_or(false, |node| node.left.is_some());
    if has_left {
        let value = {
            let node = link.as_mut().expect("checked above");
            take_min(&mut node.left)
        };
        rebalance(link);
        value
    } else {
        let node = link.take().expect("take_min requires a non-empty subtree");
        *link = node.right;
        node.value
    }
}

/// Restore the AVL invariant at this node after a child subtree changed
/// height, and refresh the cached height.
///
/// Left-heavy by 2: rotate right, doubling through the left child first when
/// its inner grandchild is strictly taller. Mirror image for right-heavy.
/// A height tie between the grandchildren (possible only after a deletion)
/// takes the single rotation; the double form can leave the tree unbalanced
/// in that case.
fn rebalance<T: Ord>(link: &mut Link<T>) {
    let Some(node) = link else {
        return;
    };

    let balance = height(&node.left) - height(&node.right);
    if balance > 1 {
        let left = node.left.as_ref().expect("left-heavy implies a left child");
        if height(&left.left) >= height(&left.right) {
            rotate_right(link);
        } else {
            if let Some(node) = link {
                rotate_left(&mut node.left);
            }
            rotate_right(link);
        }
    } else if balance < -1 {
        let right = node
            .right
            .as_ref()
            .expect("right-heavy implies a right child");
        if height(&right.right) >= height(&right.left) {
            rotate_left(link);
        } else {
            if let Some(node) = link {
                rotate_right(&mut node.right);
            }
            rotate_left(link);
        }
    } else {
        update_height(node);
    }
}

/// Single right rotation: the left child becomes the subtree root.
fn rotate_right<T>(link: &mut Link<T>) {
    if let Some(mut node) = link.take() {
        if let Some(mut new_root) = node.left.take() {
            node.left = new_root.right.take();
            update_height(&mut node);
            new_root.right = Some(node);
            update_height(&mut new_root);
            *link = Some(new_root);
        } else {
            *link = Some(node);
        }
    }
}

/// Single left rotation: the right child becomes the subtree root.
fn rotate_left<T>(link: &mut Link<T>) {
    if let Some(mut node) = link.take() {
        if let Some(mut new_root) = node.right.take() {
            node.right = new_root.left.take();
            update_height(&mut node);
            new_root.left = Some(node);
            update_height(&mut new_root);
            *link = Some(new_root);
        } else {
            *link = Some(node);
        }
    }
}

/// Preorder iterator over tree values.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a AvlNode<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right pushed first so left pops first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + fmt::Display> fmt::Display for AvlTree<T> {
    /// Preorder traversal, space-separated (the grading harness format).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.pre_order().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
