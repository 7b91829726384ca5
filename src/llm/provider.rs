use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::ProviderConfig;
use super::error::LLMError;

/// Parameters for a completion request.
#[derive(Debug, Clone)]
pub struct LLMParams {
    /// Optional system prompt prepended to the conversation
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling parameter
    pub top_p: f32,
}

impl Default for LLMParams {
    fn default() -> Self {
        Self {
            system_prompt: None,
            max_tokens: 1024,
            temperature: 0.7,
            top_p: 1.0,
        }
    }
}

/// A completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Generated text
    pub text: String,
    /// Total tokens consumed by the request, when reported
    pub tokens_used: usize,
    /// Model that produced the response
    pub model: String,
}

/// Trait for LLM provider implementations
#[async_trait]
pub trait Provider: Send + Sync {
    /// Validate configuration and prepare the provider for use
    async fn initialize(&mut self) -> Result<(), LLMError>;

    /// Generate a text completion. A single attempt is made; retry policy is
    /// the caller's concern.
    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError>;

    /// Get provider configuration
    fn get_config(&self) -> &ProviderConfig;

    /// Update provider configuration
    fn update_config(&mut self, config: ProviderConfig) -> Result<(), LLMError>;
}
