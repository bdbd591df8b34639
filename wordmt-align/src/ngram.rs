//! N-grams over token sequences
//!
//! An [`Ngram`] is a contiguous run of tokens from one sentence. Its key is
//! derived from the (case-folded) token texts only, so the same words at two
//! different places in a sentence share a key but keep distinct token
//! positions.

use crate::lexer::Token;
use serde::Serialize;

/// Prefix shared by every n-gram key
const KEY_PREFIX: &str = "n:";

/// A contiguous sequence of tokens.
///
/// An n-gram with no tokens is the *null* n-gram; it stands for "aligned to
/// nothing" on the target side of an alignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ngram {
    tokens: Vec<Token>,
    key: String,
}

impl Ngram {
    pub fn new(tokens: Vec<Token>) -> Self {
        let key = Self::key_for(&tokens);
        Self { tokens, key }
    }

    /// The null n-gram
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn key_for(tokens: &[Token]) -> String {
        let words: Vec<String> = tokens.iter().map(|t| t.key()).collect();
        format!("{}{}", KEY_PREFIX, words.join(":"))
    }

    /// Content-derived identity, independent of position.
    ///
    /// Example: `"n:son:of"`. The null n-gram has the key `"n:"`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Position of the first token in its sentence (0 for the null n-gram)
    pub fn token_position(&self) -> usize {
        self.tokens.first().map(|t| t.position()).unwrap_or(0)
    }

    /// Number of tokens in the n-gram
    pub fn token_length(&self) -> usize {
        self.tokens.len()
    }

    /// Sum of the character lengths of the tokens
    pub fn character_length(&self) -> usize {
        self.tokens.iter().map(|t| t.char_length()).sum()
    }

    /// Token length of the sentence this n-gram was taken from
    pub fn sentence_token_length(&self) -> usize {
        self.tokens
            .first()
            .map(|t| t.sentence_token_length())
            .unwrap_or(0)
    }

    pub fn is_null(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks if two n-grams carry the same words, ignoring position
    pub fn looks_like(&self, other: &Ngram) -> bool {
        self.key == other.key
    }

    /// Checks if the two n-grams cover at least one common token position
    pub fn overlaps(&self, other: &Ngram) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        let start = self.token_position();
        let end = start + self.token_length();
        let other_start = other.token_position();
        let other_end = other_start + other.token_length();
        start < other_end && other_start < end
    }
}

impl std::fmt::Display for Ngram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let words: Vec<&str> = self.tokens.iter().map(|t| t.text()).collect();
        write!(f, "{}", words.join(" "))
    }
}

/// Generate every contiguous n-gram of `tokens` up to `max_length` tokens.
///
/// N-grams are produced shortest first: all unigrams in sentence order, then
/// all bigrams, and so on.
pub fn ngrams(tokens: &[Token], max_length: usize) -> Vec<Ngram> {
    let mut result = Vec::new();
    for n in 1..=max_length.min(tokens.len()) {
        for window in tokens.windows(n) {
            result.push(Ngram::new(window.to_vec()));
        }
    }
    result
}
