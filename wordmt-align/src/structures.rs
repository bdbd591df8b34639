//! Alignment, prediction and suggestion value types

use crate::ngram::Ngram;
use serde::Serialize;
use std::collections::BTreeMap;

/// Name of the score every ranking decision is based on
pub const CONFIDENCE: &str = "confidence";

/// A pairing of a source n-gram with a target n-gram
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Alignment {
    source: Ngram,
    target: Ngram,
}

impl Alignment {
    pub fn new(source: Ngram, target: Ngram) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Ngram {
        &self.source
    }

    pub fn target(&self) -> &Ngram {
        &self.target
    }

    /// Identity of the alignment: `"<source key>-><target key>"`
    pub fn key(&self) -> String {
        format!("{}->{}", self.source.key(), self.target.key())
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source.key(), self.target.key())
    }
}

/// A candidate alignment annotated with named scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    alignment: Alignment,
    scores: BTreeMap<String, f64>,
}

impl Prediction {
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            scores: BTreeMap::new(),
        }
    }

    /// Returns the prediction with `name` set to `value`
    pub fn with_score(mut self, name: &str, value: f64) -> Self {
        self.scores.insert(name.to_string(), value);
        self
    }

    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    /// The confidence score, 0 when it was never set
    pub fn confidence(&self) -> f64 {
        self.score(CONFIDENCE).unwrap_or(0.0)
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn source(&self) -> &Ngram {
        self.alignment.source()
    }

    pub fn target(&self) -> &Ngram {
        self.alignment.target()
    }

    pub fn key(&self) -> String {
        self.alignment.key()
    }

    /// Checks if two predictions claim a common source or target token
    pub fn conflicts_with(&self, other: &Prediction) -> bool {
        self.source().overlaps(other.source()) || self.target().overlaps(other.target())
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.confidence(), self.alignment)
    }
}

/// One translation hypothesis for a sentence: an ordered set of predictions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestion {
    predictions: Vec<Prediction>,
}

impl Suggestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_prediction(&mut self, prediction: Prediction) {
        self.predictions.push(prediction);
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Mean confidence of the predictions (0 for an empty suggestion)
    pub fn compound_confidence(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.predictions.iter().map(|p| p.confidence()).sum();
        total / self.predictions.len() as f64
    }

    /// Identity of the whole hypothesis, used to drop duplicate suggestions
    pub fn key(&self) -> String {
        let keys: Vec<String> = self.predictions.iter().map(|p| p.key()).collect();
        keys.join(" ")
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.compound_confidence())?;
        for prediction in &self.predictions {
            write!(f, " [{}]", prediction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn ngram(text: &str) -> Ngram {
        Ngram::new(Lexer::new().tokenize(text))
    }

    #[test]
    fn test_alignment_key() {
        let alignment = Alignment::new(ngram("Βίβλος"), ngram("book"));
        assert_eq!(alignment.key(), "n:βίβλος->n:book");
        assert_eq!(alignment.to_string(), alignment.key());
    }

    #[test]
    fn test_alignment_to_null_target() {
        let alignment = Alignment::new(ngram("καὶ"), Ngram::empty());
        assert_eq!(alignment.key(), "n:καὶ->n:");
    }

    #[test]
    fn test_prediction_scores() {
        let prediction = Prediction::new(Alignment::new(ngram("a"), ngram("b")))
            .with_score(CONFIDENCE, 0.25)
            .with_score("cooccurrence", 0.5);
        assert_eq!(prediction.confidence(), 0.25);
        assert_eq!(prediction.score("cooccurrence"), Some(0.5));
        assert_eq!(prediction.score("missing"), None);
        assert_eq!(prediction.scores().len(), 2);
    }

    #[test]
    fn test_prediction_without_confidence() {
        let prediction = Prediction::new(Alignment::new(ngram("a"), ngram("b")));
        assert_eq!(prediction.confidence(), 0.0);
    }

    #[test]
    fn test_prediction_display() {
        let prediction =
            Prediction::new(Alignment::new(ngram("Βίβλος"), ngram("book"))).with_score(CONFIDENCE, 1.0);
        assert_eq!(prediction.to_string(), "1|n:βίβλος->n:book");
    }

    #[test]
    fn test_suggestion_display() {
        let mut suggestion = Suggestion::new();
        suggestion.add_prediction(
            Prediction::new(Alignment::new(ngram("Βίβλος"), ngram("book"))).with_score(CONFIDENCE, 1.0),
        );
        suggestion.add_prediction(
            Prediction::new(Alignment::new(ngram("γενέσεως"), ngram("genealogy")))
                .with_score(CONFIDENCE, 1.0),
        );
        assert_eq!(
            suggestion.to_string(),
            "1 [1|n:βίβλος->n:book] [1|n:γενέσεως->n:genealogy]"
        );
    }

    #[test]
    fn test_compound_confidence_is_mean() {
        let mut suggestion = Suggestion::new();
        assert_eq!(suggestion.compound_confidence(), 0.0);
        suggestion.add_prediction(
            Prediction::new(Alignment::new(ngram("a"), ngram("x"))).with_score(CONFIDENCE, 1.0),
        );
        suggestion.add_prediction(
            Prediction::new(Alignment::new(ngram("b"), ngram("y"))).with_score(CONFIDENCE, 0.5),
        );
        assert_eq!(suggestion.compound_confidence(), 0.75);
        assert_eq!(suggestion.key(), "n:a->n:x n:b->n:y");
    }

    #[test]
    fn test_conflicts() {
        let tokens = Lexer::new().tokenize("a b");
        let targets = Lexer::new().tokenize("x y");
        let a = Ngram::new(tokens[0..1].to_vec());
        let ab = Ngram::new(tokens.clone());
        let b = Ngram::new(tokens[1..2].to_vec());
        let x = Ngram::new(targets[0..1].to_vec());
        let y = Ngram::new(targets[1..2].to_vec());

        let p_ax = Prediction::new(Alignment::new(a.clone(), x.clone()));
        let p_abx = Prediction::new(Alignment::new(ab, y.clone()));
        let p_bx = Prediction::new(Alignment::new(b.clone(), x));
        let p_by = Prediction::new(Alignment::new(b.clone(), y));
        let p_b_null = Prediction::new(Alignment::new(b, Ngram::empty()));
        let p_a_null = Prediction::new(Alignment::new(a, Ngram::empty()));

        assert!(p_ax.conflicts_with(&p_abx));
        assert!(p_ax.conflicts_with(&p_bx));
        assert!(!p_ax.conflicts_with(&p_by));
        assert!(!p_a_null.conflicts_with(&p_b_null));
    }
}
