// Suggestion generation: unified profile -> prompt -> model -> SuggestionReport.
// All model calls go through llm_client::TextGenerator.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;

use thiserror::Error;

use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Malformed model response: no JSON object in a fenced json block")]
    MalformedResponse,

    #[error("Failed to parse model JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[source] serde_json::Error),
}
