//! GitHub fetcher — reads `/users/{name}` and `/users/{name}/repos` from the
//! public REST API and normalizes them into a `GitHubProfile`.

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::github::{GitHubProfile, GitHubTimelineEntry, RepositoryRecord};
use crate::sources::SourceError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const GITHUB_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_DATE_FORMAT: &str = "%d %B %Y";
const TIMELINE_MONTH_FORMAT: &str = "%B %Y";

#[derive(Debug, Deserialize)]
struct UserPayload {
    html_url: String,
    avatar_url: String,
    bio: Option<String>,
    location: Option<String>,
    #[serde(default)]
    public_repos: u32,
    #[serde(default)]
    followers: u32,
    #[serde(default)]
    following: u32,
}

#[derive(Debug, Deserialize)]
struct RepoPayload {
    name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
    html_url: String,
    created_at: Option<String>,
    pushed_at: Option<String>,
}

/// Thin client over the GitHub REST API. Cheap to clone.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("profile-advisor-api"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| SourceError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetches the user and their repositories. Any non-success status on
    /// either request means the user is treated as not found.
    pub async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, SourceError> {
        let user: UserPayload = self
            .get_ok(&["users", username])
            .await?
            .json()
            .await?;
        let repos: Vec<RepoPayload> = self
            .get_ok(&["users", username, "repos"])
            .await?
            .json()
            .await?;

        debug!("Fetched GitHub user {username} with {} repos", repos.len());

        let timeline = build_timeline(&repos);
        let projects = repos.into_iter().map(normalize_repo).collect();

        Ok(GitHubProfile {
            username: username.to_string(),
            profile_url: user.html_url,
            avatar_url: user.avatar_url,
            bio: user.bio,
            location: user.location,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            projects,
            timeline,
        })
    }

    async fn get_ok(&self, segments: &[&str]) -> Result<Response, SourceError> {
        let url = self.endpoint(segments);
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            warn!("GitHub returned {} for {url}", response.status());
            return Err(SourceError::GitHubUserNotFound);
        }
        Ok(response)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn normalize_repo(repo: RepoPayload) -> RepositoryRecord {
    RepositoryRecord {
        created_at: reformat_timestamp(repo.created_at.as_deref(), DISPLAY_DATE_FORMAT),
        pushed_at: reformat_timestamp(repo.pushed_at.as_deref(), DISPLAY_DATE_FORMAT),
        name: repo.name,
        description: repo.description,
        languages: repo.language.into_iter().filter(|l| !l.is_empty()).collect(),
        topics: repo.topics,
        url: repo.html_url,
    }
}

fn build_timeline(repos: &[RepoPayload]) -> Vec<GitHubTimelineEntry> {
    repos
        .iter()
        .filter_map(|r| reformat_timestamp(r.created_at.as_deref(), TIMELINE_MONTH_FORMAT))
        .map(|month| GitHubTimelineEntry { month })
        .collect()
}

/// Reformats a GitHub `YYYY-MM-DDTHH:MM:SSZ` timestamp. A missing value stays
/// missing; a malformed one is dropped with a warning.
fn reformat_timestamp(raw: Option<&str>, format: &str) -> Option<String> {
    let raw = raw?;
    match NaiveDateTime::parse_from_str(raw, GITHUB_TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts.format(format).to_string()),
        Err(e) => {
            warn!("Ignoring malformed GitHub timestamp '{raw}': {e}");
            None
        }
    }
}
