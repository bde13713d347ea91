use anyhow::{Context, Result};

const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup fails if the model credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub github_api_base: String,
    /// Optional; unauthenticated requests work but hit a lower rate limit.
    pub github_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            github_api_base: optional_env("GITHUB_API_BASE")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE.to_string()),
            github_token: optional_env("GITHUB_TOKEN"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Treats unset and blank variables the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable so parallel tests never race on the environment.

    #[test]
    fn test_require_env_unset_is_error() {
        let key = "PROFILE_ADVISOR_TEST_REQUIRE_UNSET";
        std::env::remove_var(key);
        let err = require_env(key).unwrap_err();
        assert!(err.to_string().contains(key));
    }

    #[test]
    fn test_require_env_blank_is_error() {
        let key = "PROFILE_ADVISOR_TEST_REQUIRE_BLANK";
        std::env::set_var(key, "   ");
        let err = require_env(key).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_require_env_set_returns_value() {
        let key = "PROFILE_ADVISOR_TEST_REQUIRE_SET";
        std::env::set_var(key, "gemini-key");
        assert_eq!(require_env(key).unwrap(), "gemini-key");
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        let key = "PROFILE_ADVISOR_TEST_OPTIONAL_BLANK";
        std::env::set_var(key, "");
        assert_eq!(optional_env(key), None);
        std::env::set_var(key, "https://api.example.test");
        assert_eq!(optional_env(key).as_deref(), Some("https://api.example.test"));
    }
}
