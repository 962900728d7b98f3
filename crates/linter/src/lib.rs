//! # Property Order Linting
//!
//! Checks that the entries of every rule body in an indented Sass file follow
//! a fixed, grouped ordering convention (see [`groups`]). Files are parsed by
//! `sass-order-syntax`; each structural node is then checked on its own.
//!
//! ```rust
//! use sass_order_linter::prelude::*;
//!
//! let file = FileName::new("button.sass");
//! let violations = lint_source(&file, ".a\n  color: red\n  top: 0\n", &LintConfig::default()).unwrap();
//! assert_eq!(
//!     violations[0].to_string(),
//!     "button.sass:3:2: Property `top` should not be defined after property `color` in line 2"
//! );
//! ```

mod batch;
mod config;
mod diagnostics;
mod error;
pub mod groups;
mod registry;
mod report;
mod rules;
mod traits;

pub use batch::{lint_batch, InputSource, LintInput};
pub use config::{LintConfig, LintSeverity};
pub use diagnostics::Violation;
pub use error::LintError;
pub use registry::{all_rule_names, node_rules};
pub use report::{lint_source, lint_tree, FileReport, Report};
pub use traits::{LintRule, NodeLintRule};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust
/// use sass_order_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::batch::{lint_batch, LintInput};
    pub use crate::config::{LintConfig, LintSeverity};
    pub use crate::diagnostics::Violation;
    pub use crate::report::{lint_source, Report};
    pub use sass_order_types::{FileName, Position, Severity};
}
