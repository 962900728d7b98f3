use sass_order_types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

/// Severity level for a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LintSeverity {
    Off,
    Warn,
    Error,
}

impl LintSeverity {
    /// Severity of reported violations, `None` when the rule is off
    #[must_use]
    pub const fn to_severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Rule configuration
///
/// ```yaml
/// lint:
///   rules:
///     property_order: warn   # or 'error' or 'off'
/// ```
///
/// Rules that are not listed run at their default severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rule severities
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, LintSeverity>,
}

impl LintConfig {
    /// Validate the lint configuration against available rules
    ///
    /// Returns an error if any configured rule names are invalid.
    /// The error message suggests the closest valid rule name.
    pub fn validate(&self) -> Result<(), String> {
        let valid_rules = crate::registry::all_rule_names();

        let mut invalid_rules: Vec<&str> = self
            .rules
            .keys()
            .map(String::as_str)
            .filter(|rule| !valid_rules.contains(rule))
            .collect();

        if invalid_rules.is_empty() {
            return Ok(());
        }

        invalid_rules.sort_unstable();
        let mut error = format!(
            "Invalid lint rule name(s): {}\n",
            invalid_rules.join(", ")
        );
        for rule in &invalid_rules {
            if let Some(suggestion) = closest_rule(rule, &valid_rules) {
                let _ = writeln!(error, "  '{rule}': did you mean '{suggestion}'?");
            }
        }
        error.push_str("\nValid rule names are:\n");
        for rule in &valid_rules {
            let _ = writeln!(error, "  - {rule}");
        }
        Err(error)
    }

    /// Get the configured severity for a rule, if any
    #[must_use]
    pub fn get_severity(&self, rule_name: &str) -> Option<LintSeverity> {
        self.rules.get(rule_name).copied()
    }

    /// Severity violations of a rule are reported at.
    ///
    /// Falls back to the rule's default; `None` when the rule is off.
    #[must_use]
    pub fn effective_severity(&self, rule_name: &str, default: Severity) -> Option<Severity> {
        self.get_severity(rule_name)
            .map_or(Some(default), LintSeverity::to_severity)
    }

    /// Set the severity of one rule
    #[must_use]
    pub fn with_rule(mut self, rule_name: impl Into<String>, severity: LintSeverity) -> Self {
        self.rules.insert(rule_name.into(), severity);
        self
    }
}

fn closest_rule<'a>(name: &str, valid_rules: &[&'a str]) -> Option<&'a str> {
    valid_rules
        .iter()
        .map(|rule| (*rule, strsim::jaro_winkler(name, rule)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(rule, _)| rule)
}
