//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Lang`] - Display language for titles (Japanese or English)
//! - [`Username`] - Validated GitHub login
//! - [`LanguageBytes`] - Language name to byte count for one repository
//! - [`RepoLanguages`] - A repository's language breakdown
//! - [`UserStats`] - The analyzed result for one user
//!
//! # Examples
//!
//! ```
//! use git_level::core::types::Lang;
//!
//! let lang: Lang = "en".parse().unwrap();
//! assert_eq!(lang, Lang::En);
//! assert_eq!(Lang::default(), Lang::Ja);
//! assert!("fr".parse::<Lang>().is_err());
//!
//! use git_level::core::types::Username;
//!
//! assert!(Username::new("octocat").is_ok());
//! assert!(Username::new("../etc").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid language '{0}', must be one of: ja, en")]
    InvalidLang(String),

    #[error("invalid GitHub username: {0}")]
    InvalidUsername(String),
}

/// Display language for rank titles.
///
/// Japanese is the primary language and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    /// All supported languages, primary first.
    pub const ALL: [Lang; 2] = [Lang::Ja, Lang::En];

    /// The short code used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Lang::Ja),
            "en" => Ok(Lang::En),
            _ => Err(TypeError::InvalidLang(s.to_string())),
        }
    }
}

/// A validated GitHub login.
///
/// Logins are 1 to 39 characters of ASCII letters, digits, `-` or `_`, and
/// cannot start with `-`. This keeps the value safe to splice into API paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Maximum login length accepted by GitHub.
    pub const MAX_LEN: usize = 39;

    /// Validate and wrap a login.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let valid_chars = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if name.is_empty()
            || name.len() > Self::MAX_LEN
            || name.starts_with('-')
            || !valid_chars
        {
            return Err(TypeError::InvalidUsername(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Byte counts per language for a single repository, as reported by the
/// GitHub languages endpoint.
pub type LanguageBytes = HashMap<String, u64>;

/// Language breakdown of one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoLanguages {
    /// Repository name (for diagnostics only)
    pub repo: String,
    /// Bytes of source per language
    pub languages: LanguageBytes,
}

impl RepoLanguages {
    /// Create a record from a repository name and its language map.
    pub fn new(repo: impl Into<String>, languages: LanguageBytes) -> Self {
        Self {
            repo: repo.into(),
            languages,
        }
    }

    /// Total bytes across every language in this repository.
    pub fn total_bytes(&self) -> u64 {
        self.languages
            .values()
            .fold(0u64, |acc, bytes| acc.saturating_add(*bytes))
    }
}

/// Result of analyzing a user's repositories.
///
/// Serialized with camelCase keys so the JSON output matches the badge
/// template field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Sum of every language byte count across every repository
    pub total_bytes: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Rank title in the selected display language
    pub rank: String,
    /// Bytes still needed to reach the next level
    pub next_level_exp: u64,
}
