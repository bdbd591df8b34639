//! Static text statistics
//!
//! A [`StaticIndex`] accumulates token count, character count and n-gram
//! frequencies over a stream of sentences. One instance covers either the
//! whole source side of a corpus or a single sentence
//! (see [`crate::sentence_index::SentenceIndex`]); the two are never mixed.

use wordmt_align::{Ngram, NgramIndex, Token};

/// Append-only statistics over the source side of some text
#[derive(Debug, Clone, Default)]
pub struct StaticIndex {
    ngram_frequency: NgramIndex,
    token_length: usize,
    character_length: usize,
}

impl StaticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sentence to the index.
    ///
    /// The n-grams are passed in rather than generated here, since callers
    /// already have them at hand.
    ///
    /// # Arguments
    /// * `tokens` - the sentence tokens
    /// * `ngrams` - the n-grams of the same sentence
    pub fn add_sentence(&mut self, tokens: &[Token], ngrams: &[Ngram]) {
        self.token_length += tokens.len();
        self.character_length += tokens.iter().map(|t| t.char_length()).sum::<usize>();
        for ngram in ngrams {
            self.ngram_frequency.increment(ngram);
        }
    }

    /// Occurrences of each n-gram key
    pub fn ngram_frequency(&self) -> &NgramIndex {
        &self.ngram_frequency
    }

    /// Occurrences of one n-gram, ignoring its position
    pub fn frequency(&self, ngram: &Ngram) -> u64 {
        self.ngram_frequency.read(ngram)
    }

    /// Total number of tokens added
    pub fn token_length(&self) -> usize {
        self.token_length
    }

    /// Total number of characters in the tokens added (whitespace and
    /// punctuation dropped by the tokenizer are not counted)
    pub fn character_length(&self) -> usize {
        self.character_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordmt_align::{Lexer, ngrams};

    fn add(index: &mut StaticIndex, text: &str) {
        let tokens = Lexer::new().tokenize(text);
        let grams = ngrams(&tokens, 3);
        index.add_sentence(&tokens, &grams);
    }

    #[test]
    fn test_empty_index() {
        let index = StaticIndex::new();
        assert_eq!(index.token_length(), 0);
        assert_eq!(index.character_length(), 0);
        assert!(index.ngram_frequency().is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let mut index = StaticIndex::new();
        add(&mut index, "son of David");
        assert_eq!(index.token_length(), 3);
        assert_eq!(index.character_length(), 3 + 2 + 5);
        assert_eq!(index.ngram_frequency().read_key("n:son:of:david"), 1);
    }

    #[test]
    fn test_accumulates_over_sentences() {
        let sentences = [
            "Βίβλος γενέσεως Ἰησοῦ Χριστοῦ",
            "υἱοῦ Δαυὶδ υἱοῦ Ἀβραάμ.",
            "Ἀβραὰμ ἐγέννησεν τὸν Ἰσαάκ",
        ];
        let lexer = Lexer::new();
        let mut index = StaticIndex::new();
        let mut expected_tokens = 0;
        let mut expected_chars = 0;
        for sentence in sentences {
            let tokens = lexer.tokenize(sentence);
            expected_tokens += tokens.len();
            expected_chars += tokens.iter().map(|t| t.text().chars().count()).sum::<usize>();
            index.add_sentence(&tokens, &ngrams(&tokens, 3));

            assert_eq!(index.token_length(), expected_tokens);
            assert_eq!(index.character_length(), expected_chars);
        }

        // "υἱοῦ" twice in the second sentence
        assert_eq!(index.ngram_frequency().read_key("n:υἱοῦ"), 2);
        assert_eq!(index.ngram_frequency().read_key("n:βίβλος"), 1);
    }

    #[test]
    fn test_frequency_equals_occurrence_count() {
        let mut index = StaticIndex::new();
        add(&mut index, "a b a");
        add(&mut index, "a b");

        let tokens = Lexer::new().tokenize("a b");
        let grams = ngrams(&tokens, 2);
        assert_eq!(index.frequency(&grams[0]), 3); // a
        assert_eq!(index.frequency(&grams[1]), 2); // b
        assert_eq!(index.frequency(&grams[2]), 2); // a b
    }

    #[test]
    fn test_replay_is_reproducible() {
        let mut first = StaticIndex::new();
        let mut second = StaticIndex::new();
        for text in ["one two", "three", "two two"] {
            add(&mut first, text);
            add(&mut second, text);
        }
        assert_eq!(first.token_length(), second.token_length());
        assert_eq!(first.character_length(), second.character_length());
        assert_eq!(
            first.ngram_frequency().read_key("n:two"),
            second.ngram_frequency().read_key("n:two")
        );
        assert_eq!(first.ngram_frequency().read_key("n:two"), 3);
    }
}
