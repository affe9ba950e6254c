//! forge
//!
//! Abstraction for remote forges that host a user's repositories.
//!
//! # Architecture
//!
//! The `Forge` trait defines the two reads the analyzer needs: list a user's
//! repositories and fetch each repository's language byte counts. The CLI
//! talks to the trait, so tests can substitute [`mock::MockForge`].
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait, `Repository` and `ForgeError`
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
