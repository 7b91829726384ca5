use thiserror::Error;

use crate::llm::LLMError;
use crate::processing::formats::FormatError;

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document format errors (the unsupported-extension case)
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Language model errors
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;
