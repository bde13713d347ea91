pub mod health;

use axum::{routing::get, Router};

use crate::analysis::handlers::handle_analyze_profile;
use crate::profile::handlers::handle_user_profile;
use crate::sources::handlers::{handle_github_profile, handle_linkedin_profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sources
        .route("/api/github/:username", get(handle_github_profile))
        .route("/api/linkedin/:user_id", get(handle_linkedin_profile))
        // Unified profile + analysis
        .route("/api/user-profile", get(handle_user_profile))
        .route("/api/analyze-profile", get(handle_analyze_profile))
        .with_state(state)
}
