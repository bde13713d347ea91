use serde::{Deserialize, Serialize};

/// A single public repository, normalized from the GitHub `/users/{name}/repos` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: Option<String>,
    /// Holds at most the repository's primary language.
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    pub url: String,
    /// `DD Month YYYY`, e.g. "07 March 2024".
    pub created_at: Option<String>,
    pub pushed_at: Option<String>,
}

/// One month label per repository creation, in repository order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubTimelineEntry {
    pub month: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubProfile {
    pub username: String,
    pub profile_url: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub projects: Vec<RepositoryRecord>,
    pub timeline: Vec<GitHubTimelineEntry>,
}
