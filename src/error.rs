use wordmt_align::AlignError;

/// Error types for the translation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// The alignment engine failed while predicting or ingesting data
    EngineError(String),
    /// Alignment memory could not be built from the supplied text
    AlignmentMemoryError(String),
    /// Invalid configuration value
    ConfigError(String),
    /// Corpus or alignment memory file could not be read or parsed
    LoadError(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::EngineError(msg) => write!(f, "Alignment engine error: {}", msg),
            MtError::AlignmentMemoryError(msg) => write!(f, "Alignment memory error: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::LoadError(msg) => write!(f, "Load error: {}", msg),
            MtError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<AlignError> for MtError {
    fn from(e: AlignError) -> Self {
        match e {
            AlignError::EmptyAlignment(msg) => MtError::AlignmentMemoryError(msg),
            AlignError::InvalidConfig(msg) | AlignError::InvalidPattern(msg) => {
                MtError::ConfigError(msg)
            }
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
