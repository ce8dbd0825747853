// Copyright (C) 2026 The classic-collections developers. See LICENSE for details.

//! Operation counters for the instrumented sorts.
//!
//! Counters are stored in a fixed array indexed by the [`Op`] enum, and are
//! incremented by the sort implementations as they run.

use std::fmt;
use std::time::Duration;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The operations a sort is charged for.
#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Op {
    /// One ordering comparison between two elements.
    Comparisons,
    /// One element moved to a different slot (a swap charges two).
    Moves,
}

/// Work accounting for a single sort invocation.
///
/// Counters only ever increase while a sort runs. `elapsed` is wall-clock
/// time for the whole call, measured by the sort itself.
#[derive(Debug, Default, Clone)]
pub struct SortStats {
    counts: [u64; Op::COUNT],
    /// Wall-clock duration of the sort call.
    pub elapsed: Duration,
}

impl SortStats {
    pub fn new() -> Self {
        SortStats::default()
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, op: Op) -> u64 {
        self.counts[op as usize]
    }

    /// Total comparisons performed.
    pub fn comparisons(&self) -> u64 {
        self.get(Op::Comparisons)
    }

    /// Total element moves performed.
    pub fn moves(&self) -> u64 {
        self.get(Op::Moves)
    }

    /// Increment the specified counter by 1.
    pub(crate) fn record(&mut self, op: Op) {
        self.counts[op as usize] += 1;
    }

    /// Increment the specified counter by `n`.
    pub(crate) fn record_many(&mut self, op: Op, n: u64) {
        self.counts[op as usize] += n;
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, moves: {}, time: {:?}",
            self.comparisons(),
            self.moves(),
            self.elapsed
        )
    }
}
