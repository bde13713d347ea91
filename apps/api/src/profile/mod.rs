// Unified profile: merges the GitHub and professional sources into one record.
// Both the profile and the analysis endpoints build it through `load_unified_profile`.

pub mod handlers;
pub mod merge;

use serde::Deserialize;
use tracing::error;

use crate::errors::AppError;
use crate::models::profile::UnifiedProfile;
use crate::sources::github::GitHubClient;
use crate::sources::linkedin::fetch_external_profile;

/// `?gh=<github username>&lid=<linkedin id>`
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub gh: String,
    pub lid: String,
}

/// Fetches both sources in order and merges them. Any fetch failure is an
/// upstream error; nothing partial is returned.
pub async fn load_unified_profile(
    github: &GitHubClient,
    query: &ProfileQuery,
) -> Result<UnifiedProfile, AppError> {
    let github_profile = github.fetch_profile(&query.gh).await.map_err(|e| {
        error!("GitHub fetch for '{}' failed: {e}", query.gh);
        AppError::Upstream(format!("GitHub fetch failed: {e}"))
    })?;

    let external_profile = fetch_external_profile(&query.lid).map_err(|e| {
        error!("LinkedIn fetch for '{}' failed: {e}", query.lid);
        AppError::Upstream(format!("LinkedIn fetch failed: {e}"))
    })?;

    Ok(merge::merge_profiles(&github_profile, &external_profile))
}
