use serde::{Deserialize, Serialize};

/// Discovery pattern used when the config names none
pub const DEFAULT_INCLUDE: &str = "**/*.sass";

/// Exclusion pattern used when the config names none
pub const DEFAULT_EXCLUDE: &str = "node_modules/**/*";

/// Top-level sass-order configuration.
///
/// ```yaml
/// include: ["**/*.sass"]
/// exclude: ["node_modules/**/*"]
/// jobs: 4
/// lint:
///   rules:
///     property_order: warn
/// ```
///
/// Every field is optional; an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SassOrderConfig {
    /// File patterns to lint when no files are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// File patterns to skip during discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Number of worker threads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Rule configuration, interpreted by the linter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<serde_json::Value>,
}

impl SassOrderConfig {
    /// Discovery patterns, falling back to [`DEFAULT_INCLUDE`]
    #[must_use]
    pub fn include_patterns(&self) -> Vec<&str> {
        self.include.as_ref().map_or_else(
            || vec![DEFAULT_INCLUDE],
            |patterns| patterns.iter().map(String::as_str).collect(),
        )
    }

    /// Exclusion patterns, falling back to [`DEFAULT_EXCLUDE`]
    #[must_use]
    pub fn exclude_patterns(&self) -> Vec<&str> {
        self.exclude.as_ref().map_or_else(
            || vec![DEFAULT_EXCLUDE],
            |patterns| patterns.iter().map(String::as_str).collect(),
        )
    }

    /// Get the lint configuration
    #[must_use]
    pub const fn lint(&self) -> Option<&serde_json::Value> {
        self.lint.as_ref()
    }
}
