//! Index of predictions by source n-gram
//!
//! The prediction index is derived data. It is rebuilt wholesale from the
//! corpus and the alignment memory, never patched:
//!
//! 1. every corpus pair is aligned by the engine and the predictions of the
//!    top-ranked suggestion are filed;
//! 2. every alignment-memory entry is filed as a prediction with the maximum
//!    confidence, so human approved alignments outrank engine output for the
//!    same n-gram.

use crate::engine::AlignmentEngine;
use crate::error::MtResult;
use std::collections::HashMap;
use tracing::debug;
use wordmt_align::{Alignment, CONFIDENCE, CorpusPair, Ngram, Prediction};

/// Confidence stamped on predictions built from alignment memory
pub const MEMORY_CONFIDENCE: f64 = 1.0;

/// Predictions filed by source n-gram key (position is ignored)
#[derive(Debug, Clone, Default)]
pub struct PredictionIndex {
    predictions: HashMap<String, Vec<Prediction>>,
}

impl PredictionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a prediction from an approved alignment
    pub fn memory_prediction(alignment: &Alignment) -> Prediction {
        Prediction::new(alignment.clone()).with_score(CONFIDENCE, MEMORY_CONFIDENCE)
    }

    /// Build an index from a corpus and alignment memory
    ///
    /// # Errors
    /// Propagates the first engine failure.
    pub fn build<E: AlignmentEngine + ?Sized>(
        corpus: &[CorpusPair],
        alignment_memory: &[Alignment],
        engine: &E,
        max_suggestions: usize,
    ) -> MtResult<Self> {
        let mut index = Self::new();

        for pair in corpus {
            let suggestions = engine.predict(&pair.source, &pair.target, max_suggestions)?;
            // Only the best suggestion for each pair is kept
            if let Some(best) = suggestions.into_iter().next() {
                for prediction in best.predictions() {
                    index.add(prediction.clone());
                }
            }
        }

        // Memory is filed even when there is no corpus
        for alignment in alignment_memory {
            index.add(Self::memory_prediction(alignment));
        }

        debug!(
            engine = engine.engine_name(),
            corpus = corpus.len(),
            memory = alignment_memory.len(),
            keys = index.len(),
            predictions = index.prediction_count(),
            "Built prediction index"
        );
        Ok(index)
    }

    /// Replace the contents of the index with a fresh build.
    ///
    /// On failure the index keeps its previous contents.
    pub fn rebuild<E: AlignmentEngine + ?Sized>(
        &mut self,
        corpus: &[CorpusPair],
        alignment_memory: &[Alignment],
        engine: &E,
        max_suggestions: usize,
    ) -> MtResult<()> {
        *self = Self::build(corpus, alignment_memory, engine, max_suggestions)?;
        Ok(())
    }

    /// File a prediction under the key of its source n-gram
    pub fn add(&mut self, prediction: Prediction) {
        self.predictions
            .entry(prediction.source().key().to_string())
            .or_default()
            .push(prediction);
    }

    /// Predictions made for n-grams that look like `ngram`; empty if none
    pub fn find(&self, ngram: &Ngram) -> &[Prediction] {
        self.predictions
            .get(ngram.key())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.predictions.clear();
    }

    /// Number of distinct source n-gram keys
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.predictions.keys().map(|k| k.as_str())
    }

    /// Total number of filed predictions
    pub fn prediction_count(&self) -> usize {
        self.predictions.values().map(|v| v.len()).sum()
    }
}
