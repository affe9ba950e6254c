//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GIT_LEVEL_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-level/config.toml`
//! 3. `~/.git-level/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use git_level::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Language: {}", config.lang());
//! println!("Output: {}", config.output().display());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::Lang;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GIT_LEVEL_CONFIG";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default location of the rendered card, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output/git-level.svg";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub global: GlobalConfig,
    /// Path the config was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing config files are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_candidates(&Self::candidate_paths())
    }

    /// Load the first existing file among `candidates`.
    pub fn load_from_candidates(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Wrap already-parsed values (no file).
    pub fn from_global(global: GlobalConfig) -> Self {
        Self { global, path: None }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let global = Self::read_config(path)?;
        global.validate()?;
        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Config file locations in search order.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("git-level/config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".git-level/config.toml"));
        }

        paths
    }

    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // --- Accessors with defaults applied ---

    /// Display language (default: Japanese).
    pub fn lang(&self) -> Lang {
        self.global
            .lang
            .as_deref()
            .and_then(|lang| lang.parse().ok())
            .unwrap_or_default()
    }

    /// Output path for the SVG card.
    pub fn output(&self) -> PathBuf {
        self.global
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// GitHub API base URL, without a trailing slash.
    pub fn api_base(&self) -> String {
        self.global
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }

    /// Whether forked repositories are counted (default: false).
    pub fn include_forks(&self) -> bool {
        self.global.include_forks.unwrap_or(false)
    }

    /// Path of the loaded config file, if one was found.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_candidates(&[temp.path().join("missing.toml")]).unwrap();

        assert!(config.loaded_from().is_none());
        assert_eq!(config.lang(), Lang::Ja);
        assert_eq!(config.output(), PathBuf::from("output/git-level.svg"));
        assert_eq!(config.api_base(), "https://api.github.com");
        assert!(!config.include_forks());
    }

    #[test]
    fn first_existing_candidate_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.toml");
        let second = temp.path().join("second.toml");
        fs::write(&second, "lang = \"en\"").unwrap();

        let config = Config::load_from_candidates(&[first, second.clone()]).unwrap();
        assert_eq!(config.loaded_from(), Some(second.as_path()));
        assert_eq!(config.lang(), Lang::En);
    }

    #[test]
    fn load_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            lang = "en"
            output = "badges/level.svg"
            api_base = "https://github.example.com/api/v3/"
            include_forks = true
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.lang(), Lang::En);
        assert_eq!(config.output(), PathBuf::from("badges/level.svg"));
        assert_eq!(config.api_base(), "https://github.example.com/api/v3");
        assert!(config.include_forks());
    }

    #[test]
    fn invalid_lang_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "lang = \"klingon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "lang = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"blue\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
