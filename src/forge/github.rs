//! forge::github
//!
//! GitHub forge implementation using the REST API.
//!
//! # Design
//!
//! Two endpoints are used:
//! - `GET /users/{user}/repos?type=owner` (paginated, 100 per page)
//! - `GET /repos/{owner}/{repo}/languages` (language name to bytes)
//!
//! # Authentication
//!
//! A token is optional. Without one, requests are anonymous and subject to
//! GitHub's low unauthenticated rate limit.
//!
//! # Rate Limiting
//!
//! - Returns `ForgeError::RateLimited` on 429, or on 403 with
//!   `x-ratelimit-remaining: 0`
//! - Does not retry
//!
//! # Example
//!
//! ```ignore
//! use git_level::forge::github::GitHubForge;
//! use git_level::forge::Forge;
//! use git_level::core::types::Username;
//!
//! let forge = GitHubForge::new(std::env::var("GITHUB_TOKEN").ok());
//! let user = Username::new("octocat")?;
//! let repos = forge.fetch_user_languages(&user, false).await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{Forge, ForgeError, Repository};
use crate::core::config::DEFAULT_API_BASE;
use crate::core::types::{LanguageBytes, Username};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "git-level";

/// GitHub's maximum page size.
const PER_PAGE: usize = 100;

/// GitHub forge implementation.
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// Personal access token, if any
    token: Option<String>,
    /// API base URL (configurable for GitHub Enterprise and tests)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("has_token", &self.token.is_some())
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubForge {
    /// Create a forge against `https://api.github.com`.
    ///
    /// An empty token is treated as no token.
    pub fn new(token: Option<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a forge against a custom API base URL.
    ///
    /// Use this for GitHub Enterprise (`https://github.example.com/api/v3`)
    /// or a local mock server.
    pub fn with_api_base(token: Option<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.filter(|t| !t.trim().is_empty()),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Whether requests are authenticated.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The API base URL in use.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ForgeError::AuthFailed("token contains invalid header characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Issue a GET request and decode the JSON body.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ForgeError> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Err(Self::error_from_response(response, status).await)
        }
    }

    /// Map an error response from the API to a `ForgeError`.
    async fn error_from_response(response: Response, status: StatusCode) -> ForgeError {
        let quota_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);

        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        map_status(status, quota_exhausted, message)
    }
}

/// Map an HTTP error status to a `ForgeError`.
fn map_status(status: StatusCode, quota_exhausted: bool, message: String) -> ForgeError {
    match status {
        StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
        StatusCode::FORBIDDEN if quota_exhausted => ForgeError::RateLimited,
        StatusCode::FORBIDDEN => ForgeError::AuthFailed(format!("Permission denied: {}", message)),
        StatusCode::NOT_FOUND => ForgeError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
        _ if status.is_server_error() => ForgeError::ApiError {
            status: status.as_u16(),
            message: format!("GitHub server error: {}", message),
        },
        _ => ForgeError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn list_repos(&self, user: &Username) -> Result<Vec<Repository>, ForgeError> {
        let mut all_repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}/users/{}/repos?type=owner&per_page={}&page={}",
                self.api_base, user, PER_PAGE, page
            );

            let page_repos: Vec<GitHubRepository> =
                self.get_json(&url).await.map_err(|e| match e {
                    ForgeError::NotFound(_) => ForgeError::NotFound(format!("user '{}'", user)),
                    other => other,
                })?;

            let page_count = page_repos.len();
            all_repos.extend(page_repos.into_iter().map(Repository::from));

            // A short page is the last page
            if page_count < PER_PAGE {
                break;
            }

            page += 1;
        }

        log::debug!(
            "{} repositories for {} across {} page(s)",
            all_repos.len(),
            user,
            page
        );
        Ok(all_repos)
    }

    async fn repo_languages(&self, repo: &Repository) -> Result<LanguageBytes, ForgeError> {
        let url = format!("{}/repos/{}/languages", self.api_base, repo.full_name);
        let languages: HashMap<String, u64> = self.get_json(&url).await?;
        Ok(languages)
    }
}

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// GitHub repository response format (fields we use).
#[derive(Deserialize)]
struct GitHubRepository {
    name: String,
    full_name: String,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
}

impl From<GitHubRepository> for Repository {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
            fork: repo.fork,
            archived: repo.archived,
        }
    }
}
