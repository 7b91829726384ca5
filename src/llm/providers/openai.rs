use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::llm::{LLMError, LLMParams, LLMResponse, Provider, ProviderConfig};

/// OpenAI chat completions response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: usize,
}

/// OpenAI client implementation
pub struct OpenAIClient {
    /// HTTP client
    client: Client,

    /// Client configuration
    config: ProviderConfig,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(config: ProviderConfig) -> Result<Self, LLMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LLMError::ConfigError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API request URL
    fn build_url(&self) -> Result<String, LLMError> {
        let endpoint = self
            .config
            .api_endpoint
            .as_ref()
            .ok_or_else(|| LLMError::ConfigError("API endpoint not configured".to_string()))?;

        Ok(format!("{}/v1/chat/completions", endpoint))
    }

    /// Build request headers
    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LLMError> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| LLMError::ConfigError("API key not configured".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| LLMError::ConfigError(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org_id) = &self.config.org_id {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org_id).map_err(|e| LLMError::ConfigError(e.to_string()))?,
            );
        }

        Ok(headers)
    }

    /// Build messages for chat completion
    fn build_messages(&self, prompt: &str, params: &LLMParams) -> Vec<serde_json::Value> {
        let mut messages = Vec::new();

        if let Some(system_prompt) = &params.system_prompt {
            messages.push(json!({
                "role": "system",
                "content": system_prompt
            }));
        }

        messages.push(json!({
            "role": "user",
            "content": prompt
        }));

        messages
    }
}

#[async_trait]
impl Provider for OpenAIClient {
    async fn initialize(&mut self) -> Result<(), LLMError> {
        if self.config.api_key.is_none() {
            return Err(LLMError::ConfigError("API key not configured".to_string()));
        }
        if self.config.api_endpoint.is_none() {
            return Err(LLMError::ConfigError(
                "API endpoint not configured".to_string(),
            ));
        }
        Ok(())
    }

    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError> {
        let url = self.build_url()?;
        let headers = self.build_headers()?;

        let request_body = json!({
            "model": self.config.model,
            "messages": self.build_messages(prompt, params),
            "temperature": params.temperature,
            "top_p": params.top_p,
            "max_tokens": params.max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            if error.contains("rate_limit") {
                return Err(LLMError::RateLimitExceeded(error));
            }
            return Err(LLMError::RequestFailed(error));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .first()
            .ok_or_else(|| LLMError::InvalidResponse("response contained no choices".to_string()))?;

        Ok(LLMResponse {
            text: choice.message.content.clone(),
            tokens_used: completion.usage.map(|u| u.total_tokens).unwrap_or(0),
            model: completion.model,
        })
    }

    fn get_config(&self) -> &ProviderConfig {
        &self.config
    }

    fn update_config(&mut self, config: ProviderConfig) -> Result<(), LLMError> {
        self.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_requires_endpoint() {
        let client = OpenAIClient::new(ProviderConfig {
            api_endpoint: None,
            ..Default::default()
        })
        .unwrap();
        assert!(client.build_url().is_err());
    }

    #[test]
    fn test_build_messages_includes_system_prompt() {
        let client = OpenAIClient::new(ProviderConfig::default()).unwrap();
        let params = LLMParams {
            system_prompt: Some("be terse".to_string()),
            ..Default::default()
        };
        let messages = client.build_messages("hello", &params);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], "hello");
    }

    #[test]
    fn test_initialize_rejects_missing_key() {
        let mut client = OpenAIClient::new(ProviderConfig::default()).unwrap();
        let result = tokio_test::block_on(client.initialize());
        assert!(matches!(result, Err(LLMError::ConfigError(_))));
    }
}
