//! Word alignment based translation suggestions
//!
//! This crate turns a parallel corpus and a memory of human approved word
//! alignments into translation suggestions for new sentences. Alignment itself
//! is delegated to an [`AlignmentEngine`]; the default engine is [`WordMap`]
//! from the `wordmt-align` crate.
//!
//! # Workflow Example
//!
//! ```
//! use wordmt::{CorpusPair, Translator};
//!
//! let mut translator = Translator::new();
//!
//! // 1. Feed a corpus of aligned sentences
//! translator.append_corpus(&[
//!     CorpusPair::new("Βίβλος γενέσεως", "The book of the genealogy"),
//!     CorpusPair::new("υἱοῦ Δαυὶδ", "son of David"),
//! ]);
//!
//! // 2. Teach it alignments a human has approved
//! translator
//!     .append_alignment_memory_from_text("Βίβλος", "book")
//!     .unwrap();
//!
//! // 3. Ask for suggestions; the prediction index is rebuilt on demand
//! let suggestions = translator.translate("Βίβλος Δαυὶδ", 1).unwrap();
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].predictions()[0].to_string(), "1|n:βίβλος->n:book");
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod loader;
pub mod mock;
pub mod prediction_index;
pub mod sentence_index;
pub mod static_index;
pub mod translator;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use config::TranslatorConfig;
pub use data::{PredictionTable, TableEntry, position_key};
pub use engine::AlignmentEngine;
pub use error::{MtError, MtResult};
pub use loader::{
    MemoryEntry, load_alignment_memory_from_file, load_corpus_from_file,
    load_corpus_from_parallel_files,
};
pub use mock::{MockEngine, MockMode};
pub use prediction_index::PredictionIndex;
pub use sentence_index::SentenceIndex;
pub use static_index::StaticIndex;
pub use translator::{Translator, TranslatorState};
pub use wordmt_align::{
    Alignment, CONFIDENCE, CorpusPair, EngineConfig, Ngram, Prediction, Suggestion, Token,
    WordMap,
};
