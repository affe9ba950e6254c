//! git-level - Turn a GitHub user's language stats into a developer level
//!
//! git-level sums the bytes of source code GitHub attributes to each of a
//! user's repositories, maps that total onto a geometric experience curve,
//! awards a rank title, and renders the result as an SVG card.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the pipeline)
//! - [`core`] - Domain types, the experience curve, titles, analysis, config
//! - [`forge`] - Abstraction for the hosting service (GitHub)
//! - [`ui`] - Terminal output and SVG rendering
//!
//! # Example
//!
//! ```
//! use git_level::core::analyzer::analyze_user_stats;
//! use git_level::core::types::{Lang, LanguageBytes, RepoLanguages};
//! use git_level::ui::card::render_svg;
//!
//! let mut languages = LanguageBytes::new();
//! languages.insert("Rust".to_string(), 5000);
//!
//! let stats = analyze_user_stats(&[RepoLanguages::new("octocat/demo", languages)], Lang::En);
//! assert_eq!(stats.level, 2);
//!
//! let svg = render_svg(&stats, "octocat");
//! assert!(svg.contains("Lv. 2"));
//! ```

pub mod cli;
pub mod core;
pub mod forge;
pub mod ui;
