//! Bilingual corpus records and co-occurrence statistics

use crate::index::NgramIndex;
use crate::ngram::Ngram;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One source sentence and its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusPair {
    pub source: String,
    pub target: String,
}

impl CorpusPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for CorpusPair {
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

/// Sentence-level n-gram statistics over a parallel corpus.
///
/// Every count is a number of sentence *pairs*: an n-gram that appears
/// twice in one sentence is counted once for that pair. This is what the
/// Dice coefficient expects.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    pairs: u64,
    source: NgramIndex,
    target: NgramIndex,
    /// Keyed by `"<source key>-><target key>"`
    cooccurrence: NgramIndex,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the n-grams of one aligned sentence pair
    pub fn add_pair(&mut self, source_ngrams: &[Ngram], target_ngrams: &[Ngram]) {
        let source_keys: HashSet<&str> = source_ngrams.iter().map(|n| n.key()).collect();
        let target_keys: HashSet<&str> = target_ngrams.iter().map(|n| n.key()).collect();

        for key in &source_keys {
            self.source.increment_by(key, 1);
        }
        for key in &target_keys {
            self.target.increment_by(key, 1);
        }
        for source_key in &source_keys {
            for target_key in &target_keys {
                self.cooccurrence
                    .increment_by(&pair_key(source_key, target_key), 1);
            }
        }
        self.pairs += 1;
    }

    /// Number of sentence pairs recorded
    pub fn pair_count(&self) -> u64 {
        self.pairs
    }

    pub fn source_frequency(&self, ngram: &Ngram) -> u64 {
        self.source.read(ngram)
    }

    pub fn target_frequency(&self, ngram: &Ngram) -> u64 {
        self.target.read(ngram)
    }

    /// Number of sentence pairs containing both n-grams
    pub fn cooccurrence(&self, source: &Ngram, target: &Ngram) -> u64 {
        self.cooccurrence
            .read_key(&pair_key(source.key(), target.key()))
    }

    /// Dice coefficient of the two n-grams over the corpus, in `[0, 1]`
    pub fn dice(&self, source: &Ngram, target: &Ngram) -> f64 {
        let total = self.source_frequency(source) + self.target_frequency(target);
        if total == 0 {
            return 0.0;
        }
        2.0 * self.cooccurrence(source, target) as f64 / total as f64
    }
}

fn pair_key(source_key: &str, target_key: &str) -> String {
    format!("{}->{}", source_key, target_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::ngram::ngrams;

    fn grams(text: &str) -> Vec<Ngram> {
        ngrams(&Lexer::new().tokenize(text), 2)
    }

    fn gram(text: &str) -> Ngram {
        Ngram::new(Lexer::new().tokenize(text))
    }

    #[test]
    fn test_corpus_pair_from_tuple() {
        let pair: CorpusPair = ("hola", "hello").into();
        assert_eq!(pair, CorpusPair::new("hola", "hello"));
    }

    #[test]
    fn test_counts_are_per_pair() {
        let mut index = CorpusIndex::new();
        index.add_pair(&grams("casa casa"), &grams("house"));
        assert_eq!(index.pair_count(), 1);
        assert_eq!(index.source_frequency(&gram("casa")), 1);
        assert_eq!(index.cooccurrence(&gram("casa"), &gram("house")), 1);
    }

    #[test]
    fn test_dice() {
        let mut index = CorpusIndex::new();
        index.add_pair(&grams("la casa"), &grams("the house"));
        index.add_pair(&grams("la mesa"), &grams("the table"));
        index.add_pair(&grams("una casa"), &grams("a house"));

        // casa: 2 pairs, house: 2 pairs, together: 2 pairs
        assert_eq!(index.dice(&gram("casa"), &gram("house")), 1.0);
        // casa: 2, the: 2, together: 1
        assert_eq!(index.dice(&gram("casa"), &gram("the")), 0.5);
        assert_eq!(index.dice(&gram("perro"), &gram("dog")), 0.0);
    }
}
