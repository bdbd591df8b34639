//! The word alignment engine
//!
//! [`WordMap`] learns from a parallel corpus and from human approved
//! alignments, then aligns new sentence pairs:
//!
//! 1. Both sentences are tokenized and split into n-grams.
//! 2. Every (source n-gram, target n-gram) candidate is scored, together with
//!    a candidate aligning each source n-gram to nothing.
//! 3. Candidates are ranked and greedily packed into suggestions in which no
//!    source or target token is used twice.
//!
//! # Example
//!
//! ```
//! use wordmt_align::{CorpusPair, WordMap};
//!
//! let mut map = WordMap::new();
//! map.append_corpus(&[CorpusPair::new("la casa", "the house")]);
//! map.append_alignment_memory_from_text("casa", "house").unwrap();
//!
//! let suggestions = map.predict("la casa", "the house", 1);
//! assert_eq!(suggestions.len(), 1);
//! ```

use crate::config::EngineConfig;
use crate::corpus::{CorpusIndex, CorpusPair};
use crate::error::{AlignError, AlignResult};
use crate::lexer::{Lexer, Token};
use crate::memory::AlignmentMemoryIndex;
use crate::ngram::{Ngram, ngrams};
use crate::structures::{Alignment, CONFIDENCE, Prediction, Suggestion};
use std::collections::HashSet;
use tracing::debug;

/// Score names attached to every prediction produced by [`WordMap::predict`]
pub mod scores {
    pub const ALIGNMENT_MEMORY: &str = "alignmentMemory";
    pub const COOCCURRENCE: &str = "cooccurrence";
    pub const ALIGNMENT_POSITION: &str = "alignmentPosition";
    pub const NGRAM_LENGTH: &str = "ngramLength";
}

/// Statistical word/phrase aligner
#[derive(Debug, Clone)]
pub struct WordMap {
    config: EngineConfig,
    lexer: Lexer,
    corpus: CorpusIndex,
    memory: AlignmentMemoryIndex,
}

impl WordMap {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            lexer: Lexer::new(),
            corpus: CorpusIndex::new(),
            memory: AlignmentMemoryIndex::new(),
        }
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    /// Returns `AlignError::InvalidConfig` if the configuration is out of range.
    pub fn with_config(config: EngineConfig) -> AlignResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the tokenizer
    pub fn with_lexer(mut self, lexer: Lexer) -> Self {
        self.lexer = lexer;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    pub fn alignment_memory(&self) -> &AlignmentMemoryIndex {
        &self.memory
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.lexer.tokenize(text)
    }

    /// All n-grams of `tokens` up to the configured maximum length
    pub fn ngrams(&self, tokens: &[Token]) -> Vec<Ngram> {
        ngrams(tokens, self.config.max_ngram_length)
    }

    /// Adds sentence pairs to the co-occurrence statistics
    pub fn append_corpus(&mut self, pairs: &[CorpusPair]) {
        for pair in pairs {
            let source_ngrams = self.ngrams(&self.tokenize(&pair.source));
            let target_ngrams = self.ngrams(&self.tokenize(&pair.target));
            self.corpus.add_pair(&source_ngrams, &target_ngrams);
        }
        debug!(
            added = pairs.len(),
            total = self.corpus.pair_count(),
            "Appended corpus pairs"
        );
    }

    /// Adds human approved alignments
    pub fn append_alignment_memory(&mut self, alignments: &[Alignment]) {
        for alignment in alignments {
            self.memory.add(alignment.clone());
        }
        debug!(
            added = alignments.len(),
            total = self.memory.len(),
            "Appended alignment memory"
        );
    }

    /// Tokenizes an approved source/target text pair into an alignment and
    /// adds it to the memory.
    ///
    /// # Errors
    /// Returns `AlignError::EmptyAlignment` if the source text has no tokens.
    /// An empty target is allowed and aligns the source to nothing.
    pub fn append_alignment_memory_from_text(
        &mut self,
        source: &str,
        target: &str,
    ) -> AlignResult<Vec<Alignment>> {
        let source_tokens = self.tokenize(source);
        if source_tokens.is_empty() {
            return Err(AlignError::EmptyAlignment(format!(
                "source text {:?} contains no tokens",
                source
            )));
        }
        let alignment = Alignment::new(
            Ngram::new(source_tokens),
            Ngram::new(self.tokenize(target)),
        );
        let alignments = vec![alignment];
        self.append_alignment_memory(&alignments);
        Ok(alignments)
    }

    /// Produces up to `max_suggestions` ranked alignment hypotheses for a
    /// sentence pair.
    ///
    /// At least one suggestion is always returned; it is empty when the
    /// source sentence has no tokens.
    pub fn predict(&self, source: &str, target: &str, max_suggestions: usize) -> Vec<Suggestion> {
        let source_ngrams = self.ngrams(&self.tokenize(source));
        let mut target_ngrams = self.ngrams(&self.tokenize(target));
        target_ngrams.push(Ngram::empty());

        let mut candidates = Vec::with_capacity(source_ngrams.len() * target_ngrams.len());
        for source_ngram in &source_ngrams {
            for target_ngram in &target_ngrams {
                candidates.push(self.score(source_ngram, target_ngram));
            }
        }

        let ranked = Self::sort_predictions(&candidates);
        Self::suggest(&ranked, max_suggestions)
    }

    /// Orders predictions by confidence, highest first.
    ///
    /// Ties are broken by alignment key so the order is reproducible.
    pub fn sort_predictions(predictions: &[Prediction]) -> Vec<Prediction> {
        let mut sorted = predictions.to_vec();
        sorted.sort_by(|a, b| {
            b.confidence()
                .total_cmp(&a.confidence())
                .then_with(|| a.key().cmp(&b.key()))
        });
        sorted
    }

    fn score(&self, source: &Ngram, target: &Ngram) -> Prediction {
        let alignment = Alignment::new(source.clone(), target.clone());
        let in_memory = self.memory.contains(&alignment);

        if target.is_null() {
            let confidence = if in_memory {
                1.0
            } else {
                self.config.null_alignment_confidence
            };
            return Prediction::new(alignment)
                .with_score(scores::ALIGNMENT_MEMORY, if in_memory { 1.0 } else { 0.0 })
                .with_score(CONFIDENCE, confidence);
        }

        let cooccurrence = self.corpus.dice(source, target);
        let position = position_agreement(source, target);
        let length = length_similarity(source, target);

        let weight_sum =
            self.config.cooccurrence_weight + self.config.position_weight + self.config.length_weight;
        let weighted = if weight_sum > 0.0 {
            (self.config.cooccurrence_weight * cooccurrence
                + self.config.position_weight * position
                + self.config.length_weight * length)
                / weight_sum
        } else {
            0.0
        };
        let confidence = if in_memory { 1.0 } else { weighted };

        Prediction::new(alignment)
            .with_score(scores::ALIGNMENT_MEMORY, if in_memory { 1.0 } else { 0.0 })
            .with_score(scores::COOCCURRENCE, cooccurrence)
            .with_score(scores::ALIGNMENT_POSITION, position)
            .with_score(scores::NGRAM_LENGTH, length)
            .with_score(CONFIDENCE, confidence)
    }

    /// Packs ranked predictions into non-conflicting suggestions.
    ///
    /// Suggestion `k` is seeded with the `k`-th ranked prediction and then
    /// filled greedily from the top of the ranking. Duplicate hypotheses are
    /// dropped.
    fn suggest(ranked: &[Prediction], max_suggestions: usize) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut seen = HashSet::new();

        for seed in 0..ranked.len() {
            if suggestions.len() >= max_suggestions {
                break;
            }
            let suggestion = build_suggestion(ranked, seed);
            if seen.insert(suggestion.key()) {
                suggestions.push(suggestion);
            }
        }

        suggestions.sort_by(|a, b| b.compound_confidence().total_cmp(&a.compound_confidence()));
        if suggestions.is_empty() {
            suggestions.push(Suggestion::new());
        }
        suggestions
    }
}

impl Default for WordMap {
    fn default() -> Self {
        Self::new()
    }
}

fn build_suggestion(ranked: &[Prediction], seed: usize) -> Suggestion {
    let mut chosen: Vec<&Prediction> = vec![&ranked[seed]];
    for prediction in ranked {
        if !chosen.iter().any(|c| c.conflicts_with(prediction)) {
            chosen.push(prediction);
        }
    }
    chosen.sort_by_key(|p| (p.source().token_position(), p.source().token_length()));

    let mut suggestion = Suggestion::new();
    for prediction in chosen {
        suggestion.add_prediction(prediction.clone());
    }
    suggestion
}

/// Relative position of an n-gram in its sentence, in `[0, 1]`
fn relative_position(ngram: &Ngram) -> f64 {
    let sentence_len = ngram.sentence_token_length();
    if sentence_len <= 1 {
        return 0.0;
    }
    ngram.token_position() as f64 / (sentence_len - 1) as f64
}

fn position_agreement(source: &Ngram, target: &Ngram) -> f64 {
    1.0 - (relative_position(source) - relative_position(target)).abs()
}

fn length_similarity(source: &Ngram, target: &Ngram) -> f64 {
    let source_len = source.token_length() as f64;
    let target_len = target.token_length() as f64;
    let longest = source_len.max(target_len);
    if longest == 0.0 {
        return 0.0;
    }
    1.0 - (source_len - target_len).abs() / longest
}
