//! Alignment engine trait
//!
//! This module defines the `AlignmentEngine` trait, the narrow contract the
//! translator uses to talk to a word alignment backend. Tokenization, n-gram
//! generation and alignment scoring all live behind it, so the translator
//! never depends on how a particular engine works.
//!
//! [`WordMap`] from `wordmt-align` is the default implementation; the
//! [`crate::mock::MockEngine`] is a deterministic stand-in for tests.
//!
//! # Example
//!
//! ```
//! use wordmt::{AlignmentEngine, CorpusPair, WordMap};
//!
//! let mut engine = WordMap::new();
//! engine.append_corpus(&[CorpusPair::new("la casa", "the house")]);
//!
//! let suggestions = AlignmentEngine::predict(&engine, "la casa", "the house", 1).unwrap();
//! assert_eq!(suggestions.len(), 1);
//! ```

use crate::error::MtResult;
use wordmt_align::{Alignment, CorpusPair, Ngram, Prediction, Suggestion, Token, WordMap};

/// Contract between the translator and a word alignment backend
///
/// Implementations keep their own copy of the corpus and alignment memory;
/// the translator forwards every mutation it receives.
pub trait AlignmentEngine {
    /// Ingest sentence pairs for future `predict` calls
    fn append_corpus(&mut self, pairs: &[CorpusPair]);

    /// Register human approved alignments
    fn append_alignment_memory(&mut self, alignments: &[Alignment]);

    /// Register a human approved alignment given as raw text
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Alignment>)` - The normalized alignments that were stored
    /// * `Err(MtError)` - If the text cannot be turned into an alignment
    fn append_alignment_memory_from_text(
        &mut self,
        source: &str,
        target: &str,
    ) -> MtResult<Vec<Alignment>>;

    /// Produce ranked alignment hypotheses for one sentence pair
    ///
    /// # Guarantees
    ///
    /// - The first element, when present, is the top-ranked suggestion
    /// - At most `max_suggestions` suggestions are returned
    fn predict(&self, source: &str, target: &str, max_suggestions: usize)
    -> MtResult<Vec<Suggestion>>;

    /// Split raw text into tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Enumerate all contiguous n-grams of a token sequence, up to the
    /// engine's maximum order
    fn ngrams(&self, tokens: &[Token]) -> Vec<Ngram>;

    /// Order predictions by the engine's ranking policy, best first
    fn sort_predictions(&self, predictions: &[Prediction]) -> Vec<Prediction>;

    /// Name of the engine, used in log output
    fn engine_name(&self) -> &str;
}

impl AlignmentEngine for WordMap {
    fn append_corpus(&mut self, pairs: &[CorpusPair]) {
        WordMap::append_corpus(self, pairs);
    }

    fn append_alignment_memory(&mut self, alignments: &[Alignment]) {
        WordMap::append_alignment_memory(self, alignments);
    }

    fn append_alignment_memory_from_text(
        &mut self,
        source: &str,
        target: &str,
    ) -> MtResult<Vec<Alignment>> {
        Ok(WordMap::append_alignment_memory_from_text(self, source, target)?)
    }

    fn predict(
        &self,
        source: &str,
        target: &str,
        max_suggestions: usize,
    ) -> MtResult<Vec<Suggestion>> {
        Ok(WordMap::predict(self, source, target, max_suggestions))
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        WordMap::tokenize(self, text)
    }

    fn ngrams(&self, tokens: &[Token]) -> Vec<Ngram> {
        WordMap::ngrams(self, tokens)
    }

    fn sort_predictions(&self, predictions: &[Prediction]) -> Vec<Prediction> {
        WordMap::sort_predictions(predictions)
    }

    fn engine_name(&self) -> &str {
        "WordMap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MtError;

    #[test]
    fn test_wordmap_engine_name() {
        assert_eq!(WordMap::new().engine_name(), "WordMap");
    }

    #[test]
    fn test_wordmap_memory_error_is_converted() {
        let mut engine = WordMap::new();
        let result = AlignmentEngine::append_alignment_memory_from_text(&mut engine, "", "book");
        assert!(matches!(result, Err(MtError::AlignmentMemoryError(_))));
    }

    #[test]
    fn test_wordmap_through_trait_object() {
        let mut engine: Box<dyn AlignmentEngine> = Box::new(WordMap::new());
        engine.append_corpus(&[CorpusPair::new("a b", "x y")]);
        let tokens = engine.tokenize("a b");
        assert_eq!(engine.ngrams(&tokens).len(), 3);
        let suggestions = engine.predict("a b", "x y", 1).unwrap();
        assert_eq!(suggestions.len(), 1);
    }
}
