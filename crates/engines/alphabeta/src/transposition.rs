//! Per-iteration memo of searched positions.
//!
//! Entries are keyed by state fingerprint and remaining depth, and remember
//! whether the stored value is exact or only a bound from a cut-off search.
//! The cache is cleared at the start of every deepening iteration.

use std::collections::HashMap;

/// How a stored value relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true value is at least this (search failed high).
    Lower,
    /// The true value is at most this (search failed low).
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: i32,
    pub bound: Bound,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    entries: HashMap<(u64, u8), CacheEntry>,
    hits: u64,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache since creation.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Raw entry lookup.
    pub fn get(&self, key: u64, depth: u8) -> Option<CacheEntry> {
        self.entries.get(&(key, depth)).copied()
    }

    /// A value usable inside the `(alpha, beta)` window, if one is stored.
    pub fn lookup(&mut self, key: u64, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&(key, depth))?;
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.value >= beta,
            Bound::Upper => entry.value <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.value)
        } else {
            None
        }
    }

    pub fn store(&mut self, key: u64, depth: u8, value: i32, bound: Bound) {
        self.entries.insert((key, depth), CacheEntry { value, bound });
    }
}

#[cfg(test)]
#[path = "transposition_tests.rs"]
mod transposition_tests;
