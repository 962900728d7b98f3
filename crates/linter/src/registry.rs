/// Registry of all available lint rules
use crate::rules::PropertyOrderRuleImpl;
use crate::traits::NodeLintRule;
use std::sync::{Arc, LazyLock};

/// Lazily initialized node rules.
/// Rules are created once and reused across all files and threads.
static NODE_RULES: LazyLock<Vec<Arc<dyn NodeLintRule>>> =
    LazyLock::new(|| vec![Arc::new(PropertyOrderRuleImpl)]);

#[must_use]
pub fn node_rules() -> &'static [Arc<dyn NodeLintRule>] {
    &NODE_RULES
}

#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    let mut names: Vec<_> = node_rules().iter().map(|rule| rule.name()).collect();
    names.sort_unstable();
    names
}
