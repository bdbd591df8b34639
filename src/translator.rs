//! Sentence translator
//!
//! The [`Translator`] ties a corpus, an alignment memory and an
//! [`AlignmentEngine`] together. Ingestion only records data; the expensive
//! [`PredictionIndex`] is rebuilt lazily, on the first translation after a
//! change.
//!
//! # Lookup keys
//!
//! Predictions are looked up by n-gram key alone, so every occurrence of the
//! same words gets the same prediction list. Results are filed under a key
//! that also carries the token position (see [`position_key`]), so repeated
//! words still get one table entry per occurrence.
//!
//! # Example
//!
//! ```
//! use wordmt::Translator;
//!
//! let mut translator = Translator::new();
//! translator
//!     .append_alignment_memory_from_text("Βίβλος", "book")
//!     .unwrap();
//!
//! let suggestions = translator.translate("Βίβλος γενέσεως", 1).unwrap();
//! assert_eq!(suggestions[0].to_string(), "1 [1|n:βίβλος->n:book]");
//! ```

use crate::config::TranslatorConfig;
use crate::data::{PredictionTable, position_key};
use crate::engine::AlignmentEngine;
use crate::error::MtResult;
use crate::prediction_index::PredictionIndex;
use crate::sentence_index::SentenceIndex;
use crate::static_index::StaticIndex;
use serde::Serialize;
use tracing::{debug, trace};
use wordmt_align::{Alignment, CorpusPair, Suggestion, WordMap};

/// Whether the prediction index reflects the ingested data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorState {
    /// Nothing has been ingested
    Empty,
    /// Data changed since the last rebuild
    Dirty,
    /// The prediction index is up to date
    Ready,
}

/// Suggests translations for sentences from aligned corpus data
#[derive(Debug)]
pub struct Translator<E: AlignmentEngine = WordMap> {
    engine: E,
    corpus: Vec<CorpusPair>,
    alignment_memory: Vec<Alignment>,
    predictions: PredictionIndex,
    corpus_statistics: StaticIndex,
    state: TranslatorState,
    default_max_suggestions: usize,
}

impl Translator<WordMap> {
    /// Create a translator backed by a default [`WordMap`] engine
    pub fn new() -> Self {
        Self::with_engine(WordMap::new())
    }

    /// Create a translator backed by a [`WordMap`] engine built from `config`
    ///
    /// # Errors
    /// Returns `MtError::ConfigError` if the engine configuration is invalid.
    pub fn with_config(config: TranslatorConfig) -> MtResult<Self> {
        let engine = WordMap::with_config(config.engine)?;
        let mut translator = Self::with_engine(engine);
        translator.default_max_suggestions = config.max_suggestions;
        Ok(translator)
    }
}

impl Default for Translator<WordMap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AlignmentEngine> Translator<E> {
    /// Create a translator around an arbitrary engine
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            corpus: Vec::new(),
            alignment_memory: Vec::new(),
            predictions: PredictionIndex::new(),
            corpus_statistics: StaticIndex::new(),
            state: TranslatorState::Empty,
            default_max_suggestions: 1,
        }
    }

    /// Append sentence pairs to the corpus
    ///
    /// The pairs are forwarded to the engine and their source sentences are
    /// added to the corpus statistics. The prediction index is rebuilt on the
    /// next translation.
    pub fn append_corpus(&mut self, pairs: &[CorpusPair]) {
        for pair in pairs {
            let tokens = self.engine.tokenize(&pair.source);
            let ngrams = self.engine.ngrams(&tokens);
            self.corpus_statistics.add_sentence(&tokens, &ngrams);
        }
        self.corpus.extend_from_slice(pairs);
        self.engine.append_corpus(pairs);
        debug!(
            engine = self.engine.engine_name(),
            added = pairs.len(),
            corpus = self.corpus.len(),
            "Appended corpus"
        );
        self.mark_dirty();
    }

    /// Append approved alignments to the alignment memory
    pub fn append_alignment_memory(&mut self, alignments: &[Alignment]) {
        self.alignment_memory.extend_from_slice(alignments);
        self.engine.append_alignment_memory(alignments);
        debug!(
            added = alignments.len(),
            memory = self.alignment_memory.len(),
            "Appended alignment memory"
        );
        self.mark_dirty();
    }

    /// Append an approved alignment given as source and target text
    ///
    /// # Errors
    /// Returns the engine's error if the text cannot form an alignment; the
    /// memory is left unchanged in that case.
    pub fn append_alignment_memory_from_text(
        &mut self,
        source: &str,
        target: &str,
    ) -> MtResult<()> {
        let alignments = self
            .engine
            .append_alignment_memory_from_text(source, target)?;
        debug!(
            added = alignments.len(),
            memory = self.alignment_memory.len() + alignments.len(),
            "Appended alignment memory from text"
        );
        self.alignment_memory.extend(alignments);
        self.mark_dirty();
        Ok(())
    }

    /// Look up ranked predictions for every n-gram occurrence of a sentence
    ///
    /// # Arguments
    ///
    /// * `sentence` - The sentence to translate
    /// * `max_suggestions` - Suggestions requested from the engine per corpus
    ///   pair when the prediction index has to be rebuilt
    ///
    /// # Returns
    ///
    /// * `Ok(PredictionTable)` - One entry per n-gram occurrence with at
    ///   least one prediction, in n-gram generation order
    /// * `Err(MtError)` - If rebuilding the prediction index failed
    pub fn translate_verbose(
        &mut self,
        sentence: &str,
        max_suggestions: usize,
    ) -> MtResult<PredictionTable> {
        self.ensure_index(max_suggestions)?;

        let tokens = self.engine.tokenize(sentence);
        let sentence_index = SentenceIndex::new(&tokens, &self.engine);
        trace!(
            tokens = sentence_index.static_index().token_length(),
            characters = sentence_index.static_index().character_length(),
            ngrams = sentence_index.static_index().ngram_frequency().len(),
            "Indexed sentence"
        );

        let mut table = PredictionTable::new();
        for ngram in self.engine.ngrams(&tokens) {
            let found = self.predictions.find(&ngram);
            if found.is_empty() {
                continue;
            }
            table.insert(position_key(&ngram), self.engine.sort_predictions(found));
        }
        Ok(table)
    }

    /// Suggest translations for a sentence
    ///
    /// Suggestion `i` collects the `i`-th best prediction of every matched
    /// n-gram occurrence. Each slot is filled independently, so a suggestion
    /// may contain predictions that overlap on the source or target side.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Suggestion>)` - At most `max_suggestions` suggestions;
    ///   empty when nothing in the sentence is known
    /// * `Err(MtError)` - If rebuilding the prediction index failed
    pub fn translate(
        &mut self,
        sentence: &str,
        max_suggestions: usize,
    ) -> MtResult<Vec<Suggestion>> {
        let table = self.translate_verbose(sentence, max_suggestions)?;

        let mut suggestions: Vec<Suggestion> = Vec::new();
        for entry in &table {
            let slots = max_suggestions.min(entry.predictions.len());
            for (i, prediction) in entry.predictions.iter().take(slots).enumerate() {
                if suggestions.len() <= i {
                    suggestions.push(Suggestion::new());
                }
                suggestions[i].add_prediction(prediction.clone());
            }
        }
        Ok(suggestions)
    }

    /// Suggest translations using the configured default suggestion count
    pub fn translate_default(&mut self, sentence: &str) -> MtResult<Vec<Suggestion>> {
        self.translate(sentence, self.default_max_suggestions)
    }

    pub fn state(&self) -> TranslatorState {
        self.state
    }

    pub fn corpus(&self) -> &[CorpusPair] {
        &self.corpus
    }

    pub fn alignment_memory(&self) -> &[Alignment] {
        &self.alignment_memory
    }

    /// Statistics over the source side of the corpus
    pub fn corpus_statistics(&self) -> &StaticIndex {
        &self.corpus_statistics
    }

    /// The prediction index as of the last rebuild
    pub fn prediction_index(&self) -> &PredictionIndex {
        &self.predictions
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn default_max_suggestions(&self) -> usize {
        self.default_max_suggestions
    }

    fn mark_dirty(&mut self) {
        self.state = if self.corpus.is_empty() && self.alignment_memory.is_empty() {
            TranslatorState::Empty
        } else {
            TranslatorState::Dirty
        };
    }

    fn ensure_index(&mut self, max_suggestions: usize) -> MtResult<()> {
        if self.state != TranslatorState::Dirty {
            return Ok(());
        }
        // Only the top suggestion of each pair is filed, so at least one is needed
        self.predictions.rebuild(
            &self.corpus,
            &self.alignment_memory,
            &self.engine,
            max_suggestions.max(1),
        )?;
        self.state = TranslatorState::Ready;
        debug!(
            engine = self.engine.engine_name(),
            keys = self.predictions.len(),
            "Prediction index ready"
        );
        Ok(())
    }
}
