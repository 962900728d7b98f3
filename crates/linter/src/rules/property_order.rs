use crate::diagnostics::Violation;
use crate::groups::rule_table;
use crate::traits::{LintRule, NodeLintRule};
use sass_order_syntax::{Entry, NodeId, SourceTree};
use sass_order_types::{FileName, Severity};

/// Trait implementation for `property_order` rule
///
/// Entries inside one rule body must follow the group order of the
/// [`crate::groups::RuleTable`]. Entries of the same group may appear in any
/// order relative to each other.
pub struct PropertyOrderRuleImpl;

impl LintRule for PropertyOrderRuleImpl {
    fn name(&self) -> &'static str {
        "property_order"
    }

    fn description(&self) -> &'static str {
        "Requires properties and mixin calls to follow the grouped ordering convention"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }
}

impl NodeLintRule for PropertyOrderRuleImpl {
    fn check(&self, file: &FileName, tree: &SourceTree, node: NodeId) -> Vec<Violation> {
        let table = rule_table();
        let mut violations = Vec::new();

        let mut current_index = 0;
        // Entry that last raised (or held) the current group
        let mut initiator: Option<&Entry> = None;

        for entry in &tree.node(node).entries {
            let index = table.index_of(entry);

            if index < current_index {
                if let Some(anchor) = initiator {
                    violations.push(Violation::new(
                        file.clone(),
                        entry.position(),
                        self.default_severity(),
                        format!(
                            "{} should not be defined after {} in line {}",
                            describe(entry, true),
                            describe(anchor, false),
                            anchor.position().line
                        ),
                        self.name(),
                    ));
                }
                continue;
            }

            current_index = index;
            initiator = Some(entry);
        }

        violations
    }
}

/// "Property `name`" or "Mixin", capitalized for sentence starts
fn describe(entry: &Entry, capitalized: bool) -> String {
    let kind = entry.kind().as_str();
    let kind = if capitalized {
        capitalize(kind)
    } else {
        kind.to_string()
    };

    match entry.property_name() {
        Some(name) => format!("{kind} `{name}`"),
        None => kind,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
