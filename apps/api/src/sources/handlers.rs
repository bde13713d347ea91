//! Axum route handlers for the individual sources.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::github::GitHubProfile;
use crate::models::linkedin::ExternalProfile;
use crate::sources::linkedin::fetch_external_profile;
use crate::state::AppState;

/// GET /api/github/:username
pub async fn handle_github_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GitHubProfile>, AppError> {
    let profile = state.github.fetch_profile(&username).await?;
    Ok(Json(profile))
}

/// GET /api/linkedin/:user_id
pub async fn handle_linkedin_profile(
    Path(user_id): Path<String>,
) -> Result<Json<ExternalProfile>, AppError> {
    Ok(Json(fetch_external_profile(&user_id)?))
}
