//! Word alignment engine for wordmt
//!
//! This crate aligns words and phrases between a source sentence and its
//! translation. It provides:
//!
//! - a regex based [`Lexer`] producing positioned [`Token`]s
//! - [`Ngram`] generation and an [`NgramIndex`] frequency counter
//! - the [`Alignment`], [`Prediction`] and [`Suggestion`] value types
//! - [`WordMap`], which learns from a parallel corpus and from human approved
//!   alignments and ranks alignment hypotheses for new sentence pairs
//!
//! # Example
//!
//! ```
//! use wordmt_align::{CorpusPair, WordMap};
//!
//! let mut map = WordMap::new();
//! map.append_corpus(&[
//!     CorpusPair::new("la casa", "the house"),
//!     CorpusPair::new("una casa", "a house"),
//! ]);
//!
//! let suggestions = map.predict("la casa", "the house", 2);
//! for suggestion in &suggestions {
//!     println!("{}", suggestion);
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod lexer;
pub mod memory;
pub mod ngram;
pub mod structures;

pub use config::EngineConfig;
pub use corpus::{CorpusIndex, CorpusPair};
pub use engine::WordMap;
pub use error::{AlignError, AlignResult};
pub use index::NgramIndex;
pub use lexer::{Lexer, Token};
pub use memory::AlignmentMemoryIndex;
pub use ngram::{Ngram, ngrams};
pub use structures::{Alignment, CONFIDENCE, Prediction, Suggestion};
