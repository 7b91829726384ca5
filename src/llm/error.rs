use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LLMError {
    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Serialization or deserialization failure
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LLMError {
    fn from(err: serde_json::Error) -> Self {
        LLMError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LLMError::RequestFailed(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            LLMError::RequestFailed(format!("Connection failed: {}", err))
        } else {
            LLMError::RequestFailed(err.to_string())
        }
    }
}
