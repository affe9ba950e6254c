//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Terminal output formatting and display
//! - [`card`] - SVG level card rendering
//!
//! # Design
//!
//! All output goes through this module so quiet mode is honored
//! consistently. Rendering functions are pure.

pub mod card;
pub mod output;
