// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Linear probing hash table with lazy deletion.
//!
//! Entries live directly in the slot array. A colliding insert walks forward
//! from the home slot (wrapping) until it finds room. Removal cannot simply
//! empty a slot, because that would break the probe chains of keys that
//! walked past it, so removed slots become tombstones: lookups skip them,
//! inserts may reuse them.
//!
//! The table grows at load factor 0.5 (counting only occupied slots), which
//! keeps probe chains short. Growth rehashes every live entry into a table
//! of twice the size rounded up to the next prime and drops all tombstones.

use crate::hash::{bucket_index, next_prime, HashError, Table, DEFAULT_BUCKETS};
use std::hash::Hash;
use std::mem;

/// Threshold load factor; reaching it grows the table before inserting.
const MAX_LOAD_FACTOR: f64 = 0.5;

/// One slot of the probing table.
///
/// `Deleted` is the lazy-deletion tombstone: it terminates nothing, probe
/// chains continue through it.
#[derive(Debug, Clone, Default)]
enum Slot<K, V> {
    #[default]
    Empty,
    Occupied(K, V),
    Deleted,
}

/// A hash table resolving collisions by linear probing.
#[derive(Debug, Clone)]
pub struct ProbingHash<K, V> {
    slots: Vec<Slot<K, V>>,
    occupied: usize,
}

impl<K: Hash + Eq, V> ProbingHash<K, V> {
    /// Create a table with the default slot count.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a table with at least `n` slots (rounded up to a prime).
    pub fn with_buckets(n: usize) -> Self {
        let n = next_prime(n.max(2));
        Self {
            slots: (0..n).map(|_| Slot::Empty).collect(),
            occupied: 0,
        }
    }

    /// Look up a value, or `Err(KeyNotFound)` if absent.
    pub fn at(&self, key: &K) -> Result<&V, HashError> {
        self.get(key).ok_or(HashError::KeyNotFound)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find_occupied(key)?;
        match &mut self.slots[index] {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    /// Home slot index for a key.
    pub fn bucket(&self, key: &K) -> usize {
        bucket_index(key, self.slots.len())
    }

    /// Whether slot `n` currently holds a live entry (0 or 1 elements).
    ///
    /// # Panics
    ///
    /// Panics if `n >= bucket_count()`.
    pub fn bucket_size(&self, n: usize) -> usize {
        match self.slots[n] {
            Slot::Occupied(..) => 1,
            _ => 0,
        }
    }

    /// Probe for the slot holding `key`.
    ///
    /// Walks from the home slot, skipping tombstones, stopping at the first
    /// `Empty` slot. Bounded by the table size so a tombstone-saturated
    /// table cannot loop forever.
    fn find_occupied(&self, key: &K) -> Option<usize> {
        let n = self.slots.len();
        let mut index = self.bucket(key);
        for _ in 0..n {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if k == key => return Some(index),
                _ => index = (index + 1) % n,
            }
        }
        None
    }

    /// Probe for where `key` should be inserted.
    ///
    /// Returns the key's own slot if present, otherwise the first tombstone
    /// seen (reusing it keeps chains short), otherwise the first empty slot.
    fn find_insert_slot(&self, key: &K) -> usize {
        let n = self.slots.len();
        let mut index = self.bucket(key);
        let mut first_tombstone = None;
        for _ in 0..n {
            match &self.slots[index] {
                Slot::Empty => return first_tombstone.unwrap_or(index),
                Slot::Occupied(k, _) if k == key => return index,
                Slot::Deleted => {
                    first_tombstone.get_or_insert(index);
                    index = (index + 1) % n;
                }
                Slot::Occupied(..) => index = (index + 1) % n,
            }
        }
        // Every slot is occupied or tombstoned; the growth threshold keeps a
        // genuine free slot available, so only tombstone reuse lands here
        first_tombstone.expect("probing table has no free slot")
    }

    /// Rehash every live entry into `new_size` slots, dropping tombstones.
    fn grow_to(&mut self, new_size: usize) {
        let old_slots = mem::replace(
            &mut self.slots,
            (0..new_size).map(|_| Slot::Empty).collect(),
        );
        for slot in old_slots {
            if let Slot::Occupied(key, value) = slot {
                let index = self.find_insert_slot(&key);
                self.slots[index] = Slot::Occupied(key, value);
            }
        }
    }
}

impl<K: Hash + Eq, V> Table<K, V> for ProbingHash<K, V> {
    fn len(&self) -> usize {
        self.occupied
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.grow_to(next_prime(2 * self.slots.len()));
        }
        let index = self.find_insert_slot(&key);
        match mem::replace(&mut self.slots[index], Slot::Occupied(key, value)) {
            Slot::Occupied(_, old) => Some(old),
            _ => {
                self.occupied += 1;
                None
            }
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        let index = self.find_occupied(key)?;
        match &self.slots[index] {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        // Only a genuine match becomes a tombstone; a missing key must not
        // poison the slot the probe stopped at
        let index = self.find_occupied(key)?;
        match mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied(_, value) => {
                self.occupied -= 1;
                Some(value)
            }
            _ => unreachable!("find_occupied returned a non-occupied slot"),
        }
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.occupied = 0;
    }

    fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }
}

impl<K: Hash + Eq, V> Default for ProbingHash<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
