//! Shared test utilities for the goto-related workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for temporary application trees
//! - [`settings`]: canned settings documents used across suites

pub mod settings;
pub mod tree;

pub use tree::TestTree;
