// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Duplicate detection over a list of strings, built on [`ChainingHash`].

use crate::hash::{ChainingHash, Table};

/// Collect every string that appears more than once in `strings`.
///
/// Each duplicated string is reported exactly once, in the order its first
/// duplicate occurrence was seen. One pass, one occurrence count per
/// distinct string.
///
/// # Example
///
/// ```
/// use classic_collections::hash::find_duplicates;
///
/// let words: Vec<String> = ["ant", "bee", "ant", "cat", "bee", "ant"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(find_duplicates(&words), vec!["ant", "bee"]);
/// ```
pub fn find_duplicates(strings: &[String]) -> Vec<String> {
    let mut counts: ChainingHash<&str, usize> = ChainingHash::new();
    let mut duplicates = Vec::new();

    for s in strings {
        match counts.get_mut(&s.as_str()) {
            Some(seen) => {
                if *seen == 1 {
                    // Second sighting makes it a duplicate; later sightings
                    // must not report it again
                    duplicates.push(s.clone());
                }
                *seen += 1;
            }
            None => {
                counts.insert(s.as_str(), 1);
            }
        }
    }

    duplicates
}
