//! Foundation types for sass-order.
//!
//! This crate provides shared types used across the linter stack.
//! It has zero external dependencies, making it suitable as a foundation layer.
//!
//! # Type Categories
//!
//! - **File types**: [`FileName`], [`Syntax`]
//! - **Position types**: [`Position`]
//! - **Severity types**: [`Severity`]

mod file;
mod position;
mod severity;

pub use file::{FileName, Syntax};
pub use position::Position;
pub use severity::Severity;
