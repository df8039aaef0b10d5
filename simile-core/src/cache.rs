//! Word-pair memoization cache
//!
//! Word-level fuzzy comparisons are the innermost hot path — the
//! sentence tier re-asks the same word pairs over and over while the
//! LCS table for a pair of sentences is filled. Results are memoized
//! for the process lifetime under an unordered canonical key; nothing
//! is ever evicted or invalidated.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Separator for canonical keys. Keys are built from alpha-only
/// normalized words, so `:` can never collide with word content.
const KEY_SEPARATOR: char = ':';

/// Process-lifetime cache of word-pair match results.
///
/// Read-mostly: a lookup takes the read lock, an insert the write lock.
/// Hit and miss counts are tracked so callers (and tests) can observe
/// that repeated lookups do not recompute.
#[derive(Debug, Default)]
pub struct WordCache {
    entries: RwLock<HashMap<String, bool>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl WordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical key for an unordered word pair: the lexicographically
    /// smaller word, the separator, the larger word. `(a, b)` and
    /// `(b, a)` map to the same entry.
    fn key(word1: &str, word2: &str) -> String {
        let (small, large) = if word1 > word2 {
            (word2, word1)
        } else {
            (word1, word2)
        };
        let mut key = String::with_capacity(small.len() + large.len() + 1);
        key.push_str(small);
        key.push(KEY_SEPARATOR);
        key.push_str(large);
        key
    }

    /// Look up the memoized result for a word pair, in either order.
    pub fn get(&self, word1: &str, word2: &str) -> Option<bool> {
        let cached = self.entries.read().get(&Self::key(word1, word2)).copied();
        match cached {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        cached
    }

    /// Memoize the result for a word pair.
    pub fn insert(&self, word1: &str, word2: &str, matched: bool) {
        self.entries
            .write()
            .insert(Self::key(word1, word2), matched);
    }

    /// Number of memoized pairs.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that found no entry.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
