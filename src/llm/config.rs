use serde::{Deserialize, Serialize};

/// Configuration for a language-model provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key. The model-assisted path is only enabled when this is set and
    /// non-empty.
    pub api_key: Option<String>,

    /// Base API endpoint, without a trailing slash.
    pub api_endpoint: Option<String>,

    /// Model identifier.
    pub model: String,

    /// Optional organization id sent alongside the key.
    pub org_id: Option<String>,

    /// Request timeout in seconds. The provider makes a single attempt per
    /// call; this timeout is the only bound on it.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: Some("https://api.openai.com".to_string()),
            model: "gpt-3.5-turbo".to_string(),
            org_id: None,
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Convenience constructor for the common key-only case.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }
}
