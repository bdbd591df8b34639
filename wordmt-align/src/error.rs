/// Error types for the alignment engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// An alignment was requested for text that produced no source tokens
    EmptyAlignment(String),
    /// A custom tokenizer pattern failed to compile
    InvalidPattern(String),
    /// Engine configuration is out of range
    InvalidConfig(String),
}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignError::EmptyAlignment(msg) => write!(f, "Empty alignment: {}", msg),
            AlignError::InvalidPattern(msg) => write!(f, "Invalid token pattern: {}", msg),
            AlignError::InvalidConfig(msg) => write!(f, "Invalid engine configuration: {}", msg),
        }
    }
}

impl std::error::Error for AlignError {}

impl From<regex::Error> for AlignError {
    fn from(e: regex::Error) -> Self {
        AlignError::InvalidPattern(e.to_string())
    }
}

/// Result type for alignment engine operations
pub type AlignResult<T> = Result<T, AlignError>;
