use axum::{
    extract::{Query, State},
    Json,
};

use crate::analysis::generator::generate_suggestions;
use crate::errors::AppError;
use crate::models::suggestion::SuggestionReport;
use crate::profile::{load_unified_profile, ProfileQuery};
use crate::state::AppState;

/// GET /api/analyze-profile?gh=&lid=
///
/// Full pipeline: fetch both sources → merge → prompt the model → parse.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<SuggestionReport>, AppError> {
    let profile = load_unified_profile(&state.github, &query).await?;
    let report = generate_suggestions(&profile, state.llm.as_ref()).await?;
    Ok(Json(report))
}
