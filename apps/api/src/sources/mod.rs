//! Source fetchers — one per upstream profile provider.
//!
//! Each fetcher normalizes its upstream payload into a model type from
//! `crate::models`. Fetchers share no state with each other.

pub mod github;
pub mod handlers;
pub mod linkedin;

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("GitHub user not found")]
    GitHubUserNotFound,

    #[error("LinkedIn user not found")]
    LinkedInUserNotFound,

    #[error("GitHub request failed: {0}")]
    GitHubUnavailable(#[from] reqwest::Error),

    #[error("Invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("GITHUB_TOKEN is not a valid header value")]
    InvalidToken,
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::GitHubUserNotFound | SourceError::LinkedInUserNotFound => {
                AppError::NotFound(err.to_string())
            }
            SourceError::GitHubUnavailable(_)
            | SourceError::InvalidBaseUrl(_)
            | SourceError::InvalidToken => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}
