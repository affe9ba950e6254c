//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Warnings and debug detail go through the `log` facade instead.

use std::fmt::Display;

use crate::core::types::UserStats;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Log filter matching this verbosity.
    pub fn log_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a byte count with thousands separators.
///
/// ```
/// use git_level::ui::output::format_bytes;
///
/// assert_eq!(format_bytes(0), "0");
/// assert_eq!(format_bytes(1_234_567), "1,234,567");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Plain-text stats summary.
pub fn format_summary(stats: &UserStats) -> String {
    [
        "--- Your Git Level ---".to_string(),
        format!("Total Bytes: {} B", stats.total_bytes),
        format!("Level: {}", stats.level),
        format!("Rank: {}", stats.rank),
        format!("Next Level Exp: {} B", stats.next_level_exp),
    ]
    .join("\n")
}
