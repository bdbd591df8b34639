//! Sentence-local statistics

use crate::engine::AlignmentEngine;
use crate::static_index::StaticIndex;
use wordmt_align::Token;

/// A collection of indexes for a single sentence.
///
/// Holds the same statistics as the corpus-level [`StaticIndex`] but scoped
/// to one sentence, so a sentence's n-gram metrics can be compared with the
/// corpus-wide ones.
#[derive(Debug, Clone)]
pub struct SentenceIndex {
    static_index: StaticIndex,
}

impl SentenceIndex {
    /// Index a sentence, using `engine` to generate its n-grams
    pub fn new<E: AlignmentEngine + ?Sized>(tokens: &[Token], engine: &E) -> Self {
        let ngrams = engine.ngrams(tokens);
        let mut static_index = StaticIndex::new();
        static_index.add_sentence(tokens, &ngrams);
        Self { static_index }
    }

    /// Static metrics of the sentence
    pub fn static_index(&self) -> &StaticIndex {
        &self.static_index
    }
}
