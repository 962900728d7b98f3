//! Trait hierarchy for lint rules.
use crate::diagnostics::Violation;
use sass_order_syntax::{NodeId, SourceTree};
use sass_order_types::{FileName, Severity};

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"property_order"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> Severity;
}

/// Lint rule that inspects the entries of one structural node at a time
///
/// The linter calls [`NodeLintRule::check`] once per node, in the order the
/// nodes were created by the parser. Rules report violations at their
/// [`LintRule::default_severity`]; the configured severity is applied by the
/// caller.
pub trait NodeLintRule: LintRule {
    /// Check a single node for issues
    fn check(&self, file: &FileName, tree: &SourceTree, node: NodeId) -> Vec<Violation>;
}
