//! Frequency index keyed by n-gram identity

use crate::ngram::Ngram;
use std::collections::HashMap;

/// Counts occurrences of n-grams by key.
///
/// Positions are ignored: "son" at token 0 and "son" at token 3 increment the
/// same counter.
#[derive(Debug, Clone, Default)]
pub struct NgramIndex {
    counts: HashMap<String, u64>,
}

impl NgramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `ngram`
    pub fn increment(&mut self, ngram: &Ngram) {
        self.increment_by(ngram.key(), 1);
    }

    /// Adds `amount` occurrences under a raw key
    pub fn increment_by(&mut self, key: &str, amount: u64) {
        *self.counts.entry(key.to_string()).or_insert(0) += amount;
    }

    /// Number of recorded occurrences of `ngram` (0 when unseen)
    pub fn read(&self, ngram: &Ngram) -> u64 {
        self.read_key(ngram.key())
    }

    pub fn read_key(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|k| k.as_str())
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
