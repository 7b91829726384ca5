use crate::llm::ProviderConfig;

/// Error types and the crate-level Result alias.
pub mod error;

/// The normalized profile record produced by a parse and its entry types.
pub mod profile;

pub use error::{Error, Result};
pub use profile::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, ParseOutcome, ParsedProfile,
    PersonalInfo, ProjectEntry, PublicationEntry, VolunteeringEntry,
};

/// Configuration for a [`CvParser`](crate::CvParser) instance.
///
/// All configuration is passed in explicitly at construction time; the crate
/// never reads the process environment.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Language-model configuration. When present (with a non-empty API key)
    /// the model-assisted extraction path is enabled; when absent every parse
    /// uses the deterministic pattern-matching path.
    pub llm: Option<ProviderConfig>,

    /// Character budget for text submitted to the language model. Longer
    /// inputs are truncated before prompting.
    pub max_model_input_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            llm: None,
            max_model_input_chars: 8000,
        }
    }
}
