// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Hash tables: separate chaining and linear probing with lazy deletion.
//!
//! Both tables share the [`Table`] trait (the common map interface), hash
//! keys with the standard library's [`DefaultHasher`], and keep a prime
//! number of buckets: growth doubles the bucket count and rounds up to the
//! next prime. They differ in collision handling and growth threshold:
//!
//! - [`ChainingHash`] keeps a list per bucket and rehashes at load factor
//!   1.0.
//! - [`ProbingHash`] stores entries in the slot array itself, walking
//!   forward on collision, and rehashes at load factor 0.5. Removal is lazy:
//!   a tombstone marks the slot so later probe chains stay intact.
//!
//! # Example
//!
//! ```
//! use classic_collections::hash::{ChainingHash, ProbingHash, Table};
//!
//! fn fill(table: &mut dyn Table<&'static str, u32>) {
//!     table.insert("one", 1);
//!     table.insert("two", 2);
//! }
//!
//! let mut chained = ChainingHash::new();
//! let mut probed = ProbingHash::new();
//! fill(&mut chained);
//! fill(&mut probed);
//! assert_eq!(chained.get(&"two"), Some(&2));
//! assert_eq!(probed.get(&"two"), Some(&2));
//! ```

pub mod chaining;
pub mod dedup;
pub mod probing;

pub use chaining::ChainingHash;
pub use dedup::find_duplicates;
pub use probing::ProbingHash;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Default number of buckets for a fresh table.
pub const DEFAULT_BUCKETS: usize = 11;

/// Errors from checked table lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// The requested key is not in the table.
    #[error("key not in hash")]
    KeyNotFound,
}

/// The operations every hash table variant supports.
pub trait Table<K, V> {
    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a key/value pair, returning the previous value for the key.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Look up the value for a key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Remove a key, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove every entry, keeping the current bucket count.
    fn clear(&mut self);

    /// Number of buckets currently allocated.
    fn bucket_count(&self) -> usize;

    /// Live entries divided by bucket count.
    fn load_factor(&self) -> f64;
}

/// Home bucket for a key in a table of `buckets` slots.
pub(crate) fn bucket_index<K: Hash>(key: &K, buckets: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() as usize) % buckets
}

/// Smallest prime >= n. Trial division is plenty for bucket counts.
pub(crate) fn next_prime(mut n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    while !is_prime(n) {
        n += 1;
    }
    n
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
