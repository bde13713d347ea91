//! Extracts the JSON payload from free-form model output.
//!
//! Grammar: "```json", optional whitespace, then an object from `{` to the
//! first `}` that is followed only by whitespace and a closing "```".
//! Fences inside JSON string values do not end the block. The first such
//! block wins; later ones are ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::analysis::AnalysisError;

static FENCED_JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fenced object pattern is valid")
});

/// Returns the raw object text from the first fenced json block.
pub fn find_fenced_json(text: &str) -> Option<&str> {
    FENCED_JSON_OBJECT
        .captures(text)?
        .get(1)
        .map(|m| m.as_str())
}

/// Locates and parses the first fenced JSON object in `text`.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, AnalysisError> {
    let raw = find_fenced_json(text).ok_or(AnalysisError::MalformedResponse)?;
    serde_json::from_str(raw).map_err(AnalysisError::Parse)
}
