// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Separate chaining hash table.
//!
//! Each bucket holds a vector of key/value pairs. Collisions simply extend
//! the bucket's chain, so the table tolerates a load factor up to 1.0 before
//! growing: at that point the bucket count doubles (rounded up to the next
//! prime) and every entry is redistributed.

use crate::hash::{bucket_index, next_prime, HashError, Table, DEFAULT_BUCKETS};
use std::hash::Hash;

/// Threshold load factor; reaching it grows the table before inserting.
const MAX_LOAD_FACTOR: f64 = 1.0;

/// A hash table resolving collisions by separate chaining.
#[derive(Debug, Clone)]
pub struct ChainingHash<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    entries: usize,
}

impl<K: Hash + Eq, V> ChainingHash<K, V> {
    /// Create a table with the default bucket count.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a table with at least `n` buckets (rounded up to a prime).
    pub fn with_buckets(n: usize) -> Self {
        let n = next_prime(n.max(2));
        Self {
            buckets: (0..n).map(|_| Vec::new()).collect(),
            entries: 0,
        }
    }

    /// Look up a value, or `Err(KeyNotFound)` if absent.
    ///
    /// The checked counterpart of [`Table::get`].
    pub fn at(&self, key: &K) -> Result<&V, HashError> {
        self.get(key).ok_or(HashError::KeyNotFound)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Home bucket index for a key.
    pub fn bucket(&self, key: &K) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Chain length of bucket `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= bucket_count()`.
    pub fn bucket_size(&self, n: usize) -> usize {
        self.buckets[n].len()
    }

    /// Iterate over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Double the bucket count (to the next prime) and redistribute.
    fn grow(&mut self) {
        let new_size = next_prime(2 * self.buckets.len());
        let old_buckets =
            std::mem::replace(&mut self.buckets, (0..new_size).map(|_| Vec::new()).collect());
        for (key, value) in old_buckets.into_iter().flatten() {
            let index = bucket_index(&key, new_size);
            self.buckets[index].push((key, value));
        }
    }
}

impl<K: Hash + Eq, V> Table<K, V> for ChainingHash<K, V> {
    fn len(&self) -> usize {
        self.entries
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.grow();
        }
        let index = self.bucket(&key);
        let chain = &mut self.buckets[index];
        match chain.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                chain.push((key, value));
                self.entries += 1;
                None
            }
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|(k, _)| k == key)?;
        self.entries -= 1;
        Some(chain.swap_remove(position).1)
    }

    fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.entries = 0;
    }

    fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn load_factor(&self) -> f64 {
        self.entries as f64 / self.buckets.len() as f64
    }
}

impl<K: Hash + Eq, V> Default for ChainingHash<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
