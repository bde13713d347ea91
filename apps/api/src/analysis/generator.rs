//! Suggestion generator — prompts the model with a unified profile and parses
//! its fenced JSON answer into a `SuggestionReport`.

use tracing::{debug, info, warn};

use crate::analysis::extract::extract_json_object;
use crate::analysis::prompts::ANALYZE_PROFILE_PROMPT;
use crate::analysis::AnalysisError;
use crate::llm_client::TextGenerator;
use crate::models::profile::UnifiedProfile;
use crate::models::suggestion::SuggestionReport;

/// Builds the full prompt for a profile.
pub fn build_prompt(profile: &UnifiedProfile) -> Result<String, AnalysisError> {
    let profile_json = serde_json::to_string_pretty(profile).map_err(AnalysisError::Serialize)?;
    Ok(ANALYZE_PROFILE_PROMPT.replace("{profile_json}", &profile_json))
}

/// Runs one generation for `profile`. The parsed object is returned as-is.
pub async fn generate_suggestions(
    profile: &UnifiedProfile,
    llm: &dyn TextGenerator,
) -> Result<SuggestionReport, AnalysisError> {
    let prompt = build_prompt(profile)?;
    debug!("Analysis prompt is {} bytes", prompt.len());

    let text = llm.generate(&prompt).await?;
    let report = SuggestionReport(extract_json_object(&text)?);

    if report.strengths_summary().is_none() {
        warn!("Model response has no strengths_summary field");
    }
    info!("Generated suggestions for '{}'", profile.name);

    Ok(report)
}
