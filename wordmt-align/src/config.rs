//! Engine configuration

use crate::error::{AlignError, AlignResult};

/// Tuning knobs for [`crate::WordMap`]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Longest n-gram (in tokens) considered on either side of an alignment
    pub max_ngram_length: usize,
    /// Weight of the corpus co-occurrence (Dice) score
    pub cooccurrence_weight: f64,
    /// Weight of the relative-position agreement score
    pub position_weight: f64,
    /// Weight of the n-gram length similarity score
    pub length_weight: f64,
    /// Confidence given to aligning a source n-gram to nothing
    pub null_alignment_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ngram_length: 3,
            cooccurrence_weight: 0.6,
            position_weight: 0.25,
            length_weight: 0.15,
            null_alignment_confidence: 0.05,
        }
    }
}

impl EngineConfig {
    pub fn with_max_ngram_length(mut self, max_ngram_length: usize) -> Self {
        self.max_ngram_length = max_ngram_length;
        self
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    /// Returns `AlignError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> AlignResult<()> {
        if self.max_ngram_length == 0 {
            return Err(AlignError::InvalidConfig(
                "max_ngram_length must be at least 1".to_string(),
            ));
        }
        let weights = [
            ("cooccurrence_weight", self.cooccurrence_weight),
            ("position_weight", self.position_weight),
            ("length_weight", self.length_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AlignError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.null_alignment_confidence) {
            return Err(AlignError::InvalidConfig(format!(
                "null_alignment_confidence must be within [0, 1], got {}",
                self.null_alignment_confidence
            )));
        }
        Ok(())
    }
}
