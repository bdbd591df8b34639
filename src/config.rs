//! Translator configuration
//!
//! Values come from [`TranslatorConfig::default`], optionally overridden by
//! environment variables:
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `WORDMT_MAX_NGRAM_LENGTH` | longest n-gram the engine aligns | 3 |
//! | `WORDMT_MAX_SUGGESTIONS` | suggestions returned per sentence | 1 |

use crate::error::{MtError, MtResult};
use wordmt_align::EngineConfig;

pub const MAX_NGRAM_LENGTH_VAR: &str = "WORDMT_MAX_NGRAM_LENGTH";
pub const MAX_SUGGESTIONS_VAR: &str = "WORDMT_MAX_SUGGESTIONS";

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    /// Configuration handed to the alignment engine
    pub engine: EngineConfig,
    /// Default number of suggestions per translated sentence
    pub max_suggestions: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            max_suggestions: 1,
        }
    }
}

impl TranslatorConfig {
    /// Load the configuration from the process environment
    ///
    /// # Errors
    /// Returns `MtError::ConfigError` if a variable is set but is not a valid
    /// number, or if the resulting engine configuration is out of range.
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(MAX_NGRAM_LENGTH_VAR) {
            config.engine.max_ngram_length = parse_count(MAX_NGRAM_LENGTH_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_SUGGESTIONS_VAR) {
            config.max_suggestions = parse_count(MAX_SUGGESTIONS_VAR, &value)?;
        }
        config.engine.validate()?;
        Ok(config)
    }
}

fn parse_count(name: &str, value: &str) -> MtResult<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        MtError::ConfigError(format!(
            "{} must be a non-negative integer, got {:?}",
            name, value
        ))
    })
}
