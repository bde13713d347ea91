use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::profile::UnifiedProfile;
use crate::profile::{load_unified_profile, ProfileQuery};
use crate::state::AppState;

/// GET /api/user-profile?gh=&lid=
pub async fn handle_user_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<UnifiedProfile>, AppError> {
    let profile = load_unified_profile(&state.github, &query).await?;
    Ok(Json(profile))
}
