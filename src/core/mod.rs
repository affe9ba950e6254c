//! core
//!
//! Core domain types and the stats analysis.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Lang, RepoLanguages, UserStats
//! - [`curve`] - Experience curve: bytes to level and next-level remainder
//! - [`titles`] - Fixed rank title table
//! - [`analyzer`] - Aggregation and stats assembly
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Analysis is pure and deterministic
//! - Constant tables are immutable statics
//! - Schemas are strict and self-describing

pub mod analyzer;
pub mod config;
pub mod curve;
pub mod titles;
pub mod types;
