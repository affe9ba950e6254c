//! core::analyzer
//!
//! Turns a user's repository language breakdowns into [`UserStats`].
//!
//! # Design
//!
//! Analysis is a pure function over its inputs:
//! - Sum every language byte count across every repository
//! - Derive level, rank and next-level remainder from that one total
//! - No I/O, no mutation of the input
//!
//! # Example
//!
//! ```
//! use git_level::core::analyzer::analyze_user_stats;
//! use git_level::core::types::{Lang, LanguageBytes, RepoLanguages};
//!
//! let mut languages = LanguageBytes::new();
//! languages.insert("Rust".to_string(), 12_000);
//! let repos = vec![RepoLanguages::new("octo-tools", languages)];
//!
//! let stats = analyze_user_stats(&repos, Lang::En);
//! assert_eq!(stats.total_bytes, 12_000);
//! assert_eq!(stats.level, 3);
//! assert_eq!(stats.rank, "Aspiring Developer");
//! assert_eq!(stats.next_level_exp, 6_200);
//! ```

use super::curve::{level_for, next_level_exp};
use super::titles::title_for;
use super::types::{Lang, RepoLanguages, UserStats};

/// Sum of every byte count across every language of every repository.
///
/// Saturates at `u64::MAX`.
pub fn total_bytes(repos: &[RepoLanguages]) -> u64 {
    repos
        .iter()
        .fold(0u64, |acc, repo| acc.saturating_add(repo.total_bytes()))
}

/// Analyze a user's repositories.
pub fn analyze_user_stats(repos: &[RepoLanguages], lang: Lang) -> UserStats {
    let total_bytes = total_bytes(repos);

    UserStats {
        total_bytes,
        level: level_for(total_bytes),
        rank: title_for(total_bytes, lang).to_string(),
        next_level_exp: next_level_exp(total_bytes),
    }
}
