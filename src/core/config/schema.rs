//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Config File
//!
//! Located at (in order of precedence):
//! 1. `$GIT_LEVEL_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-level/config.toml`
//! 3. `~/.git-level/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., `lang` must be a supported language code).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Lang;

/// User configuration.
///
/// # Example
///
/// ```toml
/// lang = "en"
/// output = "badges/git-level.svg"
/// api_base = "https://api.github.com"
/// include_forks = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default display language ("ja" or "en")
    pub lang: Option<String>,

    /// Where to write the SVG card
    pub output: Option<PathBuf>,

    /// GitHub API base URL (GitHub Enterprise: `https://host/api/v3`)
    pub api_base: Option<String>,

    /// Count forked repositories too
    pub include_forks: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lang) = &self.lang {
            lang.parse::<Lang>()
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }

        if let Some(api_base) = &self.api_base {
            if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid api_base '{}', must start with http:// or https://",
                    api_base
                )));
            }
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "output cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
