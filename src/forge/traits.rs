//! forge::traits
//!
//! Forge trait definition for reading repository data from a hosting service.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` so a failed request surfaces to the CLI as a
//! single fatal error. There are no retries.
//!
//! # Example
//!
//! ```ignore
//! use git_level::forge::{Forge, ForgeError};
//! use git_level::core::types::Username;
//!
//! async fn count(forge: &dyn Forge, user: &Username) -> Result<usize, ForgeError> {
//!     let repos = forge.fetch_user_languages(user, false).await?;
//!     Ok(repos.len())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{LanguageBytes, RepoLanguages, Username};

/// Errors from forge operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited (set GITHUB_TOKEN to raise the limit)")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A repository owned by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Short repository name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Whether the repository is a fork
    pub fork: bool,
    /// Whether the repository is archived
    pub archived: bool,
}

impl Repository {
    /// Build a non-fork, non-archived repository for `owner/name`.
    pub fn new(owner: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_name: format!("{}/{}", owner, name),
            name,
            fork: false,
            archived: false,
        }
    }
}

/// The Forge trait for reading a user's repositories and languages.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// List every repository owned by `user`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    /// - `RateLimited` if the API quota is exhausted
    async fn list_repos(&self, user: &Username) -> Result<Vec<Repository>, ForgeError>;

    /// Bytes of source per language in `repo`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repository disappeared between listing and lookup
    async fn repo_languages(&self, repo: &Repository) -> Result<LanguageBytes, ForgeError>;

    /// Fetch the language breakdown of every repository owned by `user`.
    ///
    /// Forks are skipped unless `include_forks` is set. Repositories are
    /// fetched one at a time, in listing order.
    async fn fetch_user_languages(
        &self,
        user: &Username,
        include_forks: bool,
    ) -> Result<Vec<RepoLanguages>, ForgeError> {
        let repos = self.list_repos(user).await?;
        let mut result = Vec::with_capacity(repos.len());

        for repo in repos {
            if repo.fork && !include_forks {
                log::debug!("skipping fork {}", repo.full_name);
                continue;
            }

            let languages = self.repo_languages(&repo).await?;
            let record = RepoLanguages::new(repo.full_name, languages);
            log::debug!("{}: {} bytes", record.repo, record.total_bytes());
            result.push(record);
        }

        Ok(result)
    }
}
