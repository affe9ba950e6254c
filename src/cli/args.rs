//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--lang <ja|en>`: Title language; invalid values warn and fall back to `ja`
//! - `--output <path>`: Where to write the SVG card
//! - `--config <path>`: Read this config file instead of the default locations
//! - `--api-base <url>`: GitHub API base URL
//! - `--include-forks`: Count forked repositories
//! - `--json`: Print the stats as JSON
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::Parser;
use std::path::PathBuf;

use crate::core::types::Username;
use crate::ui::output::Verbosity;

/// git-level - Turn your GitHub language stats into a developer level card
#[derive(Parser, Debug)]
#[command(name = "git-level")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Japanese titles (default), card written to output/git-level.svg
    git-level octocat

    # English titles
    git-level octocat --lang=en

    # Machine-readable stats, custom card location
    git-level octocat --json --output badges/level.svg

ENVIRONMENT:
    GITHUB_TOKEN        Token for authenticated API requests (higher rate limit)
    GIT_LEVEL_CONFIG    Path to a config file
    RUST_LOG            Override the log filter")]
pub struct Cli {
    /// GitHub username to analyze
    pub username: Username,

    /// Title language (ja or en)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Where to write the SVG card [default: output/git-level.svg]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Count forked repositories too
    #[arg(long)]
    pub include_forks: bool,

    /// Print stats as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_username_and_lang() {
        let cli = Cli::try_parse_from(["git-level", "octocat", "--lang=en"]).unwrap();
        assert_eq!(cli.username.as_str(), "octocat");
        assert_eq!(cli.lang.as_deref(), Some("en"));
        assert!(!cli.json);
    }

    #[test]
    fn lang_is_free_text() {
        // Invalid languages are resolved later with a warning, not a usage error
        let cli = Cli::try_parse_from(["git-level", "octocat", "--lang", "fr"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn username_required() {
        assert!(Cli::try_parse_from(["git-level"]).is_err());
    }

    #[test]
    fn invalid_username_rejected() {
        assert!(Cli::try_parse_from(["git-level", "bad/name"]).is_err());
    }

    #[test]
    fn quiet_wins_over_debug() {
        let cli = Cli::try_parse_from(["git-level", "octocat", "-q", "--debug"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}
