//! # Sass Order Test Utilities
//!
//! Shared test infrastructure for the sass-order crates.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_raw_string_hashes)]
//!
//! ## Modules
//!
//! - [`fixtures`] - Common Sass sources and the messages they produce
//! - [`project`] - Temporary directories populated with source files
//! - [`assertions`] - Snapshot formatting helpers

pub mod assertions;
pub mod fixtures;
pub mod project;

pub use assertions::format_messages;
pub use project::{TestProject, TestProjectBuilder};

// Re-export insta for snapshot testing
pub use insta;
