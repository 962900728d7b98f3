//! # Indented Sass Structure Parsing
//!
//! This crate turns indented Sass source into a flat arena of structural
//! nodes (selectors, at-rules, placeholder selectors), each owning the
//! property-like entries of its body.
//!
//! There is no grammar. Every line is classified on its own by a small,
//! ordered set of patterns, and nesting is reconstructed from indentation:
//!
//! - a deeper line descends into the node created just before it
//! - a shallower line walks up the parent chain, one step per indentation unit
//! - a line at the same depth stays in the current node
//!
//! ```rust
//! let tree = sass_order_syntax::parse(".button\n  color: red\n").unwrap();
//! let (_, button) = tree.roots().next().unwrap();
//! assert_eq!(button.entries.len(), 1);
//! ```

mod classify;
mod error;
mod parser;
mod tree;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
pub use tree::{Entry, EntryKind, NodeId, NodeKind, SourceNode, SourceTree};
