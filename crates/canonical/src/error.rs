use thiserror::Error;

/// Errors raised by the tokenizer and stop-word layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read stop-word list {path}: {reason}")]
    StopWordsRead { path: String, reason: String },
}
