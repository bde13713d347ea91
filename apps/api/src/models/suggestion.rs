use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Career suggestions exactly as returned by the model.
///
/// The prompt asks for `strengths_summary`, `github_suggestions`,
/// `linkedin_suggestions` and `career_recommendations`; the object is passed
/// through verbatim rather than re-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionReport(pub Map<String, Value>);

impl SuggestionReport {
    pub fn strengths_summary(&self) -> Option<&str> {
        self.0.get("strengths_summary").and_then(Value::as_str)
    }
}
