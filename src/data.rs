//! Core data structures returned by the translator

use serde::Serialize;
use std::collections::HashMap;
use wordmt_align::{Ngram, Prediction};

/// Separator between an n-gram key and its token position in a table key.
///
/// Tokens never contain `@`, so the position can always be recovered.
const POSITION_SEPARATOR: char = '@';

/// Builds the table key for an n-gram occurrence: its key qualified by its
/// token position, e.g. `"n:υἱοῦ@4"`.
///
/// The same words at two positions of a sentence get two table entries.
pub fn position_key(ngram: &Ngram) -> String {
    format!(
        "{}{}{}",
        ngram.key(),
        POSITION_SEPARATOR,
        ngram.token_position()
    )
}

/// One row of a [`PredictionTable`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    /// Position-qualified n-gram key (see [`position_key`])
    pub key: String,
    /// Candidate predictions, best first
    pub predictions: Vec<Prediction>,
}

/// Ranked predictions for every matched n-gram occurrence of a sentence
///
/// Entries keep the order in which they were inserted, which is the order
/// the engine generated the sentence's n-grams in.
///
/// # Example
///
/// ```ignore
/// PredictionTable {
///     entries: [
///         TableEntry { key: "n:βίβλος@0", predictions: [1|n:βίβλος->n:book] },
///         TableEntry { key: "n:γενέσεως@1", predictions: [1|n:γενέσεως->n:genealogy] },
///     ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionTable {
    entries: Vec<TableEntry>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl PredictionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store predictions under a key, replacing any previous entry for it
    pub fn insert(&mut self, key: String, predictions: Vec<Prediction>) {
        if let Some(&index) = self.positions.get(&key) {
            self.entries[index].predictions = predictions;
            return;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(TableEntry { key, predictions });
    }

    pub fn get(&self, key: &str) -> Option<&[Prediction]> {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].predictions.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PredictionTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
