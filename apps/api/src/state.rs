use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::sources::github::GitHubClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub github: GitHubClient,
    /// Model backend. `GeminiClient` in production, a canned generator in tests.
    pub llm: Arc<dyn TextGenerator>,
}
