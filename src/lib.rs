//! cv-parser - structured data extraction from uploaded CV documents
//!
//! This library ingests a CV file (PDF, Word, or plain text), extracts its
//! raw text, and produces a normalized [`ParsedProfile`] record. Parsing runs
//! through one of two mutually exclusive paths per call:
//! - a model-assisted path that asks a configured language model for a
//!   structured JSON extraction, and
//! - a deterministic regex/heuristic path, used by default and as the
//!   fallback whenever the model path fails for any reason.
//!
//! Every failure mode short of an unsupported file extension degrades to a
//! lesser-quality but always-present result: extraction backend failures
//! yield empty text, model failures fall back to pattern matching, and empty
//! input yields an all-defaults record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use tracing::{error, warn};

/// LLM module for the optional model-assisted extraction path.
///
/// Provides:
/// - The provider trait and configuration
/// - An OpenAI chat-completions client
/// - The structured-extraction prompt
pub mod llm;

/// Processing module for document text extraction and field parsing.
pub mod processing;

/// Common types: the profile record, configuration, and error types.
pub mod types;

pub use crate::types::{Error, ParseOutcome, ParsedProfile, ParserConfig, Result};

use crate::llm::{prompt, LLMParams, OpenAIClient, Provider};

/// File extensions accepted by [`CvParser::parse_cv`].
pub const SUPPORTED_FORMATS: &[&str] = &[".pdf", ".docx", ".doc", ".txt"];

/// Coordinates text extraction and field parsing for uploaded CV documents.
///
/// A parser holds no per-call state; the same instance can serve any number
/// of parse calls. The optional provider handle is read-only and safe to
/// share.
pub struct CvParser {
    config: ParserConfig,
    provider: Option<Arc<dyn Provider>>,
}

impl CvParser {
    /// Create a parser from explicit configuration.
    ///
    /// When the configuration carries an LLM section with a non-empty API
    /// key, the model-assisted path is enabled. A failure to construct the
    /// client is logged and leaves only the deterministic path active; it is
    /// never surfaced to parse calls.
    pub fn new(config: ParserConfig) -> Self {
        let provider = config
            .llm
            .as_ref()
            .filter(|llm_config| {
                llm_config
                    .api_key
                    .as_deref()
                    .is_some_and(|key| !key.trim().is_empty())
            })
            .and_then(|llm_config| match OpenAIClient::new(llm_config.clone()) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn Provider>),
                Err(e) => {
                    warn!("could not initialize language model client: {}", e);
                    None
                }
            });

        Self { config, provider }
    }

    /// Replace the language-model provider.
    ///
    /// Accepts any [`Provider`] implementation, which also makes the
    /// model-assisted path straightforward to exercise in tests.
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// The file extensions this parser accepts.
    pub fn supported_formats() -> &'static [&'static str] {
        SUPPORTED_FORMATS
    }

    /// Whether `filename` carries a supported extension.
    pub fn is_supported(filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let dotted = format!(".{}", ext.to_lowercase());
                SUPPORTED_FORMATS.contains(&dotted.as_str())
            })
            .unwrap_or(false)
    }

    /// Parse the CV at `path`, treating it as a document of the declared
    /// `extension`.
    ///
    /// Only an unsupported extension produces an error. Every other failure
    /// degrades: unreadable documents parse as empty text, and a failing
    /// model call falls back to deterministic pattern matching, so the result
    /// for a supported extension is always a full (possibly all-defaults)
    /// record.
    pub async fn parse_cv(&self, path: &Path, extension: &str) -> Result<ParsedProfile> {
        let text = processing::formats::extract_text(path, extension).await?;

        let mut profile = match &self.provider {
            Some(provider) => match self.parse_with_model(provider.as_ref(), &text).await {
                Ok(profile) => profile,
                Err(e) => {
                    error!("model-assisted parsing failed: {}, falling back to pattern matching", e);
                    processing::extract_fields(&text)
                }
            },
            None => processing::extract_fields(&text),
        };

        profile.normalize();
        Ok(profile)
    }

    /// Like [`parse_cv`](Self::parse_cv), but always returns a
    /// JSON-serializable value: the profile mapping on success, or
    /// `{"error": "..."}` when the extension is rejected.
    pub async fn parse_report(&self, path: &Path, extension: &str) -> ParseOutcome {
        match self.parse_cv(path, extension).await {
            Ok(profile) => ParseOutcome::Profile(Box::new(profile)),
            Err(e) => ParseOutcome::Failure {
                error: e.to_string(),
            },
        }
    }

    async fn parse_with_model(
        &self,
        provider: &dyn Provider,
        text: &str,
    ) -> Result<ParsedProfile> {
        let truncated = truncate_for_model(text, self.config.max_model_input_chars);
        let extraction_prompt = prompt::extraction_prompt(&truncated);
        let params = LLMParams {
            system_prompt: Some(prompt::SYSTEM_PROMPT.to_string()),
            max_tokens: 2000,
            temperature: 0.3,
            top_p: 1.0,
        };

        let response = provider.complete(&extraction_prompt, &params).await?;
        let body = prompt::strip_code_fences(&response.text);
        let profile: ParsedProfile = serde_json::from_str(&body)?;
        Ok(profile)
    }
}

/// Bound `text` to `max_chars` characters, marking the cut with an ellipsis.
fn truncate_for_model(text: &str, max_chars: usize) -> String {
    let mut truncated: String = text.chars().take(max_chars).collect();
    if truncated.len() < text.len() {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        assert!(CvParser::is_supported("resume.pdf"));
        assert!(CvParser::is_supported("RESUME.DOCX"));
        assert!(CvParser::is_supported("old.doc"));
        assert!(CvParser::is_supported("notes.txt"));
        assert!(!CvParser::is_supported("photo.png"));
        assert!(!CvParser::is_supported("no_extension"));
    }

    #[test]
    fn test_truncate_for_model() {
        assert_eq!(truncate_for_model("short", 10), "short");
        assert_eq!(truncate_for_model("abcdefghij", 4), "abcd...");
    }
}
