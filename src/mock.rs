//! Mock alignment engine for testing
//!
//! This module provides a deterministic engine for exercising the translator
//! without depending on the statistics of the real aligner.
//!
//! # Example
//!
//! ```
//! use wordmt::{AlignmentEngine, MockEngine, MockMode};
//!
//! let engine = MockEngine::new(MockMode::Positional);
//! let suggestions = engine.predict("a b", "x y", 1).unwrap();
//! assert_eq!(suggestions[0].key(), "n:a->n:x n:b->n:y");
//! assert_eq!(engine.predict_calls(), 1);
//! ```

use crate::engine::AlignmentEngine;
use crate::error::{MtError, MtResult};
use std::cell::Cell;
use wordmt_align::{
    Alignment, CONFIDENCE, CorpusPair, Lexer, Ngram, Prediction, Suggestion, Token, WordMap,
    ngrams,
};

/// Confidence given to positional alignments
pub const POSITIONAL_CONFIDENCE: f64 = 0.5;

/// Confidence given to the null alignments of the fallback suggestion
pub const NULL_CONFIDENCE: f64 = 0.1;

const MOCK_NGRAM_LENGTH: usize = 3;

/// Mock prediction modes for testing different scenarios
#[derive(Debug, Clone, PartialEq)]
pub enum MockMode {
    /// Align the i-th source token with the i-th target token.
    ///
    /// Source tokens past the end of the target are aligned to null. A second,
    /// lower ranked suggestion aligns every source token to null.
    Positional,

    /// Return no suggestions at all
    Empty,

    /// Simulate engine failures
    Error(String),
}

/// Mock engine that produces predictable alignments and counts its calls
#[derive(Debug)]
pub struct MockEngine {
    mode: MockMode,
    lexer: Lexer,
    corpus: Vec<CorpusPair>,
    alignment_memory: Vec<Alignment>,
    predict_calls: Cell<usize>,
    last_max_suggestions: Cell<Option<usize>>,
}

impl MockEngine {
    /// Create a new MockEngine with the given mode
    ///
    /// # Arguments
    ///
    /// * `mode` - The prediction mode to use
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            lexer: Lexer::new(),
            corpus: Vec::new(),
            alignment_memory: Vec::new(),
            predict_calls: Cell::new(0),
            last_max_suggestions: Cell::new(None),
        }
    }

    pub fn mode(&self) -> &MockMode {
        &self.mode
    }

    /// Number of times `predict` has been called
    pub fn predict_calls(&self) -> usize {
        self.predict_calls.get()
    }

    /// `max_suggestions` passed to the most recent `predict` call
    pub fn last_max_suggestions(&self) -> Option<usize> {
        self.last_max_suggestions.get()
    }

    /// Sentence pairs received so far
    pub fn corpus(&self) -> &[CorpusPair] {
        &self.corpus
    }

    /// Alignments received so far
    pub fn alignment_memory(&self) -> &[Alignment] {
        &self.alignment_memory
    }

    fn positional(&self, source: &str, target: &str) -> Vec<Suggestion> {
        let source_tokens = self.lexer.tokenize(source);
        let target_tokens = self.lexer.tokenize(target);

        let mut aligned = Suggestion::new();
        let mut unaligned = Suggestion::new();
        for token in &source_tokens {
            let source_ngram = Ngram::new(vec![token.clone()]);
            let target_ngram = target_tokens
                .get(token.position())
                .map(|t| Ngram::new(vec![t.clone()]))
                .unwrap_or_else(Ngram::empty);
            let confidence = if target_ngram.is_null() {
                NULL_CONFIDENCE
            } else {
                POSITIONAL_CONFIDENCE
            };

            aligned.add_prediction(
                Prediction::new(Alignment::new(source_ngram.clone(), target_ngram))
                    .with_score(CONFIDENCE, confidence),
            );
            unaligned.add_prediction(
                Prediction::new(Alignment::new(source_ngram, Ngram::empty()))
                    .with_score(CONFIDENCE, NULL_CONFIDENCE),
            );
        }
        vec![aligned, unaligned]
    }
}

impl AlignmentEngine for MockEngine {
    fn append_corpus(&mut self, pairs: &[CorpusPair]) {
        self.corpus.extend_from_slice(pairs);
    }

    fn append_alignment_memory(&mut self, alignments: &[Alignment]) {
        self.alignment_memory.extend_from_slice(alignments);
    }

    fn append_alignment_memory_from_text(
        &mut self,
        source: &str,
        target: &str,
    ) -> MtResult<Vec<Alignment>> {
        let source_tokens = self.lexer.tokenize(source);
        if source_tokens.is_empty() {
            return Err(MtError::AlignmentMemoryError(format!(
                "source text {:?} has no tokens",
                source
            )));
        }
        let alignment = Alignment::new(
            Ngram::new(source_tokens),
            Ngram::new(self.lexer.tokenize(target)),
        );
        self.alignment_memory.push(alignment.clone());
        Ok(vec![alignment])
    }

    fn predict(
        &self,
        source: &str,
        target: &str,
        max_suggestions: usize,
    ) -> MtResult<Vec<Suggestion>> {
        self.predict_calls.set(self.predict_calls.get() + 1);
        self.last_max_suggestions.set(Some(max_suggestions));

        match &self.mode {
            MockMode::Positional => {
                let mut suggestions = self.positional(source, target);
                suggestions.truncate(max_suggestions);
                Ok(suggestions)
            }
            MockMode::Empty => Ok(Vec::new()),
            MockMode::Error(msg) => Err(MtError::EngineError(msg.clone())),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.lexer.tokenize(text)
    }

    fn ngrams(&self, tokens: &[Token]) -> Vec<Ngram> {
        ngrams(tokens, MOCK_NGRAM_LENGTH)
    }

    fn sort_predictions(&self, predictions: &[Prediction]) -> Vec<Prediction> {
        WordMap::sort_predictions(predictions)
    }

    fn engine_name(&self) -> &str {
        "Mock Engine"
    }
}
