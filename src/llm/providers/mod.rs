/// OpenAI API client implementation.
///
/// Provides integration with OpenAI's GPT models through their chat
/// completions REST API.
pub mod openai;

pub use openai::OpenAIClient;
