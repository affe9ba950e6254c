//! cli
//!
//! Command-line interface layer for git-level.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Initialize logging
//! - Load configuration and the API token
//! - Delegate to [`generate`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves options
//! and hands off to the fetch/analyze/render pipeline.

pub mod args;
pub mod generate;

pub use args::Cli;
pub use generate::GenerateOptions;

use anyhow::Result;

use crate::core::config::Config;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = config.loaded_from() {
        log::debug!("loaded config from {}", path.display());
    }

    let token = std::env::var(TOKEN_ENV_VAR).ok();
    let opts = GenerateOptions::resolve(&cli, &config, token);
    generate::generate(&opts)?;
    Ok(())
}

/// Initialize `env_logger` at the level implied by the flags.
///
/// `RUST_LOG` overrides the flag-derived level.
fn init_logging(cli: &Cli) {
    let _ = env_logger::Builder::new()
        .filter_level(cli.verbosity().log_filter())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
