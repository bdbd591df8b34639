//! Sentence tokenization
//!
//! The lexer splits raw sentence text into word tokens. Whitespace and
//! punctuation are dropped; every token remembers where it sits in the
//! sentence (token index and character offset) together with the length of
//! the sentence it came from, so positional scores can be computed later
//! without re-reading the text.

use crate::error::AlignResult;
use regex::Regex;
use serde::Serialize;

/// Default token pattern: runs of letters, combining marks and digits,
/// optionally joined by inner apostrophes ("don't", "l’homme").
pub const DEFAULT_TOKEN_PATTERN: &str = r"[\p{L}\p{M}\p{N}]+(?:['’][\p{L}\p{M}\p{N}]+)*";

/// A single word in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    /// Index of the token within its sentence
    position: usize,
    /// Character offset of the token within its sentence
    char_position: usize,
    sentence_token_len: usize,
    sentence_char_len: usize,
}

impl Token {
    /// Create a standalone token at the given token position.
    ///
    /// The sentence lengths default to a one-token sentence made of this
    /// token alone. Tokens produced by [`Lexer::tokenize`] carry the real
    /// sentence lengths.
    pub fn new(text: &str, position: usize) -> Self {
        let char_len = text.chars().count();
        Self {
            text: text.to_string(),
            position,
            char_position: 0,
            sentence_token_len: 1,
            sentence_char_len: char_len,
        }
    }

    /// The token text exactly as it appeared in the sentence
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded identity of the token
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn char_position(&self) -> usize {
        self.char_position
    }

    /// Number of characters (Unicode scalar values) in the token
    pub fn char_length(&self) -> usize {
        self.text.chars().count()
    }

    pub fn sentence_token_length(&self) -> usize {
        self.sentence_token_len
    }

    pub fn sentence_char_length(&self) -> usize {
        self.sentence_char_len
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Regex based word tokenizer
#[derive(Debug, Clone)]
pub struct Lexer {
    pattern: Regex,
}

impl Lexer {
    /// Create a lexer using [`DEFAULT_TOKEN_PATTERN`]
    pub fn new() -> Self {
        let pattern = Regex::new(DEFAULT_TOKEN_PATTERN).unwrap();
        Self { pattern }
    }

    /// Create a lexer with a custom token pattern.
    ///
    /// Every non-overlapping, non-empty match of the pattern becomes one token.
    ///
    /// # Errors
    /// Returns `AlignError::InvalidPattern` if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> AlignResult<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Split a sentence into tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let sentence_char_len = text.chars().count();

        // Byte offsets from the regex are converted to character offsets
        // incrementally, so the sentence is only walked once.
        let mut tokens = Vec::new();
        let mut last_byte = 0;
        let mut last_char = 0;
        for m in self.pattern.find_iter(text) {
            if m.as_str().is_empty() {
                continue;
            }
            last_char += text[last_byte..m.start()].chars().count();
            last_byte = m.start();
            tokens.push(Token {
                text: m.as_str().to_string(),
                position: tokens.len(),
                char_position: last_char,
                sentence_token_len: 0,
                sentence_char_len,
            });
        }

        let token_count = tokens.len();
        for token in &mut tokens {
            token.sentence_token_len = token_count;
        }
        tokens
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_punctuation() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("Hello, world!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["Hello", "world"]);
    }

    #[test]
    fn test_tokenize_greek() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("Βίβλος γενέσεως Ἰησοῦ Χριστοῦ υἱοῦ Δαυὶδ υἱοῦ Ἀβραάμ.");
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[0].text(), "Βίβλος");
        assert_eq!(tokens[0].key(), "βίβλος");
        assert_eq!(tokens[7].text(), "Ἀβραάμ");
    }

    #[test]
    fn test_token_positions() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("the  cat sat");
        assert_eq!(tokens[0].position(), 0);
        assert_eq!(tokens[1].position(), 1);
        assert_eq!(tokens[2].position(), 2);
        assert_eq!(tokens[0].char_position(), 0);
        assert_eq!(tokens[1].char_position(), 5);
        assert_eq!(tokens[2].char_position(), 9);
    }

    #[test]
    fn test_char_positions_count_characters_not_bytes() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("na\u{ef}ve caf\u{e9}");
        assert_eq!(tokens[1].char_position(), 6);
        assert_eq!(tokens[1].char_length(), 4);
    }

    #[test]
    fn test_sentence_lengths() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("one two three");
        for token in &tokens {
            assert_eq!(token.sentence_token_length(), 3);
            assert_eq!(token.sentence_char_length(), 13);
        }
    }

    #[test]
    fn test_inner_apostrophe_kept() {
        let lexer = Lexer::new();
        let tokens = lexer.tokenize("don't stop");
        assert_eq!(tokens[0].text(), "don't");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_pattern_matching_empty_string_yields_no_empty_tokens() {
        let lexer = Lexer::with_pattern(r"\w*").unwrap();
        let tokens = lexer.tokenize("a, b");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(tokens[1].position(), 1);
        assert_eq!(tokens[1].char_position(), 3);
        assert!(lexer.tokenize("").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let lexer = Lexer::new();
        assert!(lexer.tokenize("").is_empty());
        assert!(lexer.tokenize(" ... !").is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let lexer = Lexer::with_pattern(r"\S+").unwrap();
        let tokens = lexer.tokenize("a-b c.d");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(), "a-b");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Lexer::with_pattern("(").is_err());
    }

    #[test]
    fn test_standalone_token() {
        let token = Token::new("Book", 3);
        assert_eq!(token.position(), 3);
        assert_eq!(token.key(), "book");
        assert_eq!(token.to_string(), "Book");
        assert_eq!(token.sentence_token_length(), 1);
    }
}
