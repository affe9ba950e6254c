//! cli::generate
//!
//! Fetch, analyze, render and save the level card.
//!
//! # Design
//!
//! The command:
//! - Resolves options from flags, config and environment
//! - Fetches every repository's language bytes (one sequential pass)
//! - Analyzes the totals into level, rank and next-level remainder
//! - Prints a summary (or JSON) and writes the SVG card
//!
//! Any failure is fatal: there are no retries.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::args::Cli;
use crate::core::analyzer::analyze_user_stats;
use crate::core::config::Config;
use crate::core::types::{Lang, UserStats, Username};
use crate::forge::github::GitHubForge;
use crate::forge::Forge;
use crate::ui::card::render_svg;
use crate::ui::output::{self, Verbosity};

/// Fully resolved options for one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub username: Username,
    pub lang: Lang,
    pub output: PathBuf,
    pub api_base: String,
    pub include_forks: bool,
    pub json: bool,
    pub verbosity: Verbosity,
    pub token: Option<String>,
}

impl GenerateOptions {
    /// Combine CLI flags, config values and the token.
    ///
    /// CLI flags override config; config overrides defaults.
    pub fn resolve(cli: &Cli, config: &Config, token: Option<String>) -> Self {
        Self {
            username: cli.username.clone(),
            lang: resolve_lang(cli.lang.as_deref(), config),
            output: cli.output.clone().unwrap_or_else(|| config.output()),
            api_base: cli
                .api_base
                .as_deref()
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| config.api_base()),
            include_forks: cli.include_forks || config.include_forks(),
            json: cli.json,
            verbosity: cli.verbosity(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Pick the display language.
///
/// An invalid `--lang` value is not an error: it logs a warning and falls
/// back to the default language.
pub fn resolve_lang(flag: Option<&str>, config: &Config) -> Lang {
    match flag {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!(
                "Invalid language specified: {}. Using default '{}'.",
                value,
                Lang::default()
            );
            Lang::default()
        }),
        None => config.lang(),
    }
}

/// Run the command.
///
/// This is a synchronous wrapper that uses tokio to run the async implementation.
pub fn generate(opts: &GenerateOptions) -> Result<PathBuf> {
    let forge = GitHubForge::with_api_base(opts.token.clone(), opts.api_base.clone());
    let rt = tokio::runtime::Runtime::new()?;
    let stats = rt.block_on(fetch_stats(&forge, opts))?;
    report(&stats, opts)
}

/// Fetch the user's repositories from `forge` and analyze them.
pub async fn fetch_stats(forge: &dyn Forge, opts: &GenerateOptions) -> Result<UserStats> {
    if opts.token.is_none() {
        log::warn!("GITHUB_TOKEN environment variable is not set. API rate limits may apply.");
    }

    output::print(
        format!("Fetching data for GitHub user: {}...", opts.username),
        quiet_if_json(opts),
    );

    let repos = forge
        .fetch_user_languages(&opts.username, opts.include_forks)
        .await
        .with_context(|| format!("failed to fetch repositories for '{}'", opts.username))?;
    log::debug!("fetched {} repositories from {}", repos.len(), forge.name());

    Ok(analyze_user_stats(&repos, opts.lang))
}

/// Print the stats and write the SVG card. Returns the card path.
pub fn report(stats: &UserStats, opts: &GenerateOptions) -> Result<PathBuf> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        output::print(
            format!("\n{}", output::format_summary(stats)),
            opts.verbosity,
        );
    }

    let svg = render_svg(stats, opts.username.as_str());
    write_card(&opts.output, &svg)?;

    output::print(
        format!("\nSVG stats card saved to: {}", opts.output.display()),
        quiet_if_json(opts),
    );
    Ok(opts.output.clone())
}

/// Write the card, creating parent directories as needed.
pub fn write_card(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, svg).with_context(|| format!("failed to write '{}'", path.display()))?;
    log::debug!("wrote {} bytes to {}", svg.len(), path.display());
    Ok(())
}

/// Keep stdout machine-readable in JSON mode.
fn quiet_if_json(opts: &GenerateOptions) -> Verbosity {
    if opts.json {
        Verbosity::Quiet
    } else {
        opts.verbosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GlobalConfig;
    use crate::core::types::LanguageBytes;
    use crate::forge::mock::{FailOn, MockForge};
    use crate::forge::ForgeError;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["git-level"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn options(output: PathBuf) -> GenerateOptions {
        GenerateOptions {
            username: Username::new("octocat").unwrap(),
            lang: Lang::En,
            output,
            api_base: "http://unused".to_string(),
            include_forks: false,
            json: false,
            verbosity: Verbosity::Quiet,
            token: Some("ghp_test".to_string()),
        }
    }

    fn languages(entries: &[(&str, u64)]) -> LanguageBytes {
        entries
            .iter()
            .map(|(lang, bytes)| (lang.to_string(), *bytes))
            .collect()
    }

    #[test]
    fn flags_override_config() {
        let config = Config::from_global(GlobalConfig {
            lang: Some("en".to_string()),
            output: Some(PathBuf::from("from-config.svg")),
            api_base: Some("https://ghe.example.com/api/v3".to_string()),
            include_forks: Some(false),
        });
        let cli = cli(&[
            "octocat",
            "--lang",
            "ja",
            "--output",
            "flag.svg",
            "--api-base",
            "http://localhost:9999/",
            "--include-forks",
        ]);

        let opts = GenerateOptions::resolve(&cli, &config, Some("tok".to_string()));
        assert_eq!(opts.lang, Lang::Ja);
        assert_eq!(opts.output, PathBuf::from("flag.svg"));
        assert_eq!(opts.api_base, "http://localhost:9999");
        assert!(opts.include_forks);
        assert_eq!(opts.token.as_deref(), Some("tok"));
    }

    #[test]
    fn config_fills_missing_flags() {
        let config = Config::from_global(GlobalConfig {
            lang: Some("en".to_string()),
            include_forks: Some(true),
            ..Default::default()
        });
        let opts = GenerateOptions::resolve(&cli(&["octocat"]), &config, None);
        assert_eq!(opts.lang, Lang::En);
        assert_eq!(opts.output, PathBuf::from("output/git-level.svg"));
        assert_eq!(opts.api_base, "https://api.github.com");
        assert!(opts.include_forks);
        assert!(opts.token.is_none());
    }

    #[test]
    fn invalid_lang_falls_back_to_default() {
        let config = Config::from_global(GlobalConfig {
            lang: Some("en".to_string()),
            ..Default::default()
        });
        assert_eq!(resolve_lang(Some("fr"), &config), Lang::Ja);
        assert_eq!(resolve_lang(Some("en"), &Config::default()), Lang::En);
        assert_eq!(resolve_lang(None, &config), Lang::En);
    }

    #[test]
    fn blank_token_is_none() {
        let opts = GenerateOptions::resolve(
            &cli(&["octocat"]),
            &Config::default(),
            Some(String::new()),
        );
        assert!(opts.token.is_none());
    }

    #[tokio::test]
    async fn fetch_stats_analyzes_mock_repos() {
        let forge = MockForge::new()
            .with_repo("octocat", "a", languages(&[("Go", 100), ("Rust", 50)]))
            .with_repo("octocat", "b", languages(&[("Go", 25)]))
            .with_fork("octocat", "c", languages(&[("C", 1_000_000)]));
        let temp = TempDir::new().unwrap();

        let stats = fetch_stats(&forge, &options(temp.path().join("card.svg")))
            .await
            .unwrap();

        assert_eq!(stats.total_bytes, 175);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.rank, "Hello World Habitants");
        assert_eq!(stats.next_level_exp, 4825);
    }

    #[tokio::test]
    async fn fetch_stats_reports_forge_errors() {
        let forge = MockForge::new()
            .with_user("octocat")
            .fail_on(FailOn::ListRepos(ForgeError::RateLimited));
        let temp = TempDir::new().unwrap();

        let err = fetch_stats(&forge, &options(temp.path().join("card.svg")))
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("failed to fetch repositories for 'octocat'"));
        assert!(message.contains("rate limited"));
    }

    #[test]
    fn report_writes_card_into_new_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/git-level.svg");
        let stats = analyze_user_stats(&[], Lang::En);

        let written = report(&stats, &options(path.clone())).unwrap();

        assert_eq!(written, path);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("octocat&apos;s Git Level"));
        assert!(svg.contains("Hello World Habitants"));
    }

    #[test]
    fn write_card_accepts_bare_file_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("card.svg");
        write_card(&path, "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
