//! Running rules over parsed files and collecting the results.

use crate::config::LintConfig;
use crate::diagnostics::Violation;
use crate::error::LintError;
use crate::registry::node_rules;
use sass_order_syntax::{ParseError, SourceTree};
use sass_order_types::{FileName, Severity};

/// Parse and lint one file's source text.
///
/// Violations are ordered by node creation order, then by entry order
/// inside each node.
///
/// # Errors
///
/// Returns the parser's error when the indentation is malformed. No partial
/// results are reported for such a file.
#[tracing::instrument(skip(file, source, config), fields(file = %file, size = source.len()))]
pub fn lint_source(
    file: &FileName,
    source: &str,
    config: &LintConfig,
) -> Result<Vec<Violation>, ParseError> {
    let tree = sass_order_syntax::parse(source)?;
    Ok(lint_tree(file, &tree, config))
}

/// Lint an already parsed tree
#[must_use]
pub fn lint_tree(file: &FileName, tree: &SourceTree, config: &LintConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (id, _) in tree.iter() {
        for rule in node_rules() {
            let Some(severity) = config.effective_severity(rule.name(), rule.default_severity())
            else {
                continue;
            };
            violations.extend(
                rule.check(file, tree, id)
                    .into_iter()
                    .map(|violation| violation.with_severity(severity)),
            );
        }
    }

    tracing::debug!(file = %file, violations = violations.len(), "Linted file");
    violations
}

/// Outcome of linting one file
#[derive(Debug)]
pub struct FileReport {
    pub file: FileName,
    pub outcome: Result<Vec<Violation>, LintError>,
}

impl FileReport {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        self.outcome.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&LintError> {
        self.outcome.as_ref().err()
    }
}

/// Results for a batch of files, in input order
#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    #[must_use]
    pub fn new(files: Vec<FileReport>) -> Self {
        Self { files }
    }

    /// All violations, grouped by file in input order
    pub fn violations(&self) -> impl Iterator<Item = &Violation> + '_ {
        self.files.iter().flat_map(FileReport::violations)
    }

    /// Files that could not be read or parsed
    pub fn errors(&self) -> impl Iterator<Item = (&FileName, &LintError)> + '_ {
        self.files
            .iter()
            .filter_map(|report| report.error().map(|error| (&report.file, error)))
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    #[must_use]
    pub fn has_io_errors(&self) -> bool {
        self.errors().any(|(_, error)| error.is_io())
    }

    #[must_use]
    pub fn has_parse_errors(&self) -> bool {
        self.errors().any(|(_, error)| error.is_parse())
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations()
            .filter(|violation| violation.severity == severity)
            .count()
    }
}
