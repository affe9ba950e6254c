//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge stores users, their repositories and each repository's
//! language bytes in memory, and allows configuring failure scenarios.
//!
//! # Example
//!
//! ```
//! use git_level::core::types::{LanguageBytes, Username};
//! use git_level::forge::mock::MockForge;
//! use git_level::forge::Forge;
//!
//! # tokio_test::block_on(async {
//! let mut languages = LanguageBytes::new();
//! languages.insert("Rust".to_string(), 4096);
//!
//! let forge = MockForge::new().with_repo("octocat", "hello", languages);
//! let user = Username::new("octocat").unwrap();
//!
//! let repos = forge.fetch_user_languages(&user, false).await.unwrap();
//! assert_eq!(repos.len(), 1);
//! assert_eq!(repos[0].total_bytes(), 4096);
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{Forge, ForgeError, Repository};
use crate::core::types::{LanguageBytes, Username};

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockForge {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockForgeInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockForgeInner {
    /// Repositories per user login, in listing order.
    repos: HashMap<String, Vec<Repository>>,
    /// Language bytes by repository full name.
    languages: HashMap<String, LanguageBytes>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_repos with the given error.
    ListRepos(ForgeError),
    /// Fail repo_languages for the named repository (full name).
    RepoLanguages { full_name: String, error: ForgeError },
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ListRepos { user: String },
    RepoLanguages { full_name: String },
}

impl MockForge {
    /// Create a new empty mock forge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository owned by `owner`.
    pub fn with_repo(self, owner: &str, name: &str, languages: LanguageBytes) -> Self {
        self.insert(Repository::new(owner, name), languages)
    }

    /// Add a forked repository owned by `owner`.
    pub fn with_fork(self, owner: &str, name: &str, languages: LanguageBytes) -> Self {
        let repo = Repository {
            fork: true,
            ..Repository::new(owner, name)
        };
        self.insert(repo, languages)
    }

    /// Register a user with no repositories.
    pub fn with_user(self, owner: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.repos.entry(owner.to_string()).or_default();
        }
        self
    }

    fn insert(self, repo: Repository, languages: LanguageBytes) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let owner = repo
                .full_name
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string();
            inner.languages.insert(repo.full_name.clone(), languages);
            inner.repos.entry(owner).or_default().push(repo);
        }
        self
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_repos(&self, user: &Username) -> Result<Vec<Repository>, ForgeError> {
        self.record(MockOperation::ListRepos {
            user: user.to_string(),
        });

        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::ListRepos(e)) = &inner.fail_on {
            return Err(e.clone());
        }

        inner
            .repos
            .get(user.as_str())
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(format!("user '{}'", user)))
    }

    async fn repo_languages(&self, repo: &Repository) -> Result<LanguageBytes, ForgeError> {
        self.record(MockOperation::RepoLanguages {
            full_name: repo.full_name.clone(),
        });

        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::RepoLanguages { full_name, error }) = &inner.fail_on {
            if *full_name == repo.full_name {
                return Err(error.clone());
            }
        }

        inner
            .languages
            .get(&repo.full_name)
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(format!("repository '{}'", repo.full_name)))
    }
}
