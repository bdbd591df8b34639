//! Human approved alignments

use crate::structures::Alignment;
use std::collections::{HashMap, HashSet};

/// Alignment memory indexed by source n-gram key
#[derive(Debug, Clone, Default)]
pub struct AlignmentMemoryIndex {
    by_source: HashMap<String, Vec<Alignment>>,
    keys: HashSet<String>,
}

impl AlignmentMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alignment; adding the same alignment twice is a no-op
    pub fn add(&mut self, alignment: Alignment) {
        if !self.keys.insert(alignment.key()) {
            return;
        }
        self.by_source
            .entry(alignment.source().key().to_string())
            .or_default()
            .push(alignment);
    }

    pub fn contains(&self, alignment: &Alignment) -> bool {
        self.keys.contains(&alignment.key())
    }

    /// Approved alignments for a source n-gram key
    pub fn for_source(&self, source_key: &str) -> &[Alignment] {
        self.by_source
            .get(source_key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
