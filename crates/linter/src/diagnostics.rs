use sass_order_types::{FileName, Position, Severity};

/// A style finding in one file.
///
/// Violations are produced by lint rules and never changed afterwards, except
/// for the severity, which the linter sets from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File the violation was found in
    pub file: FileName,
    /// Line and indentation of the offending entry
    pub position: Position,
    /// Severity (from rule default or config override)
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Rule identifier (e.g., `"property_order"`)
    pub rule: String,
}

impl Violation {
    /// Create a new violation
    #[must_use]
    pub fn new(
        file: FileName,
        position: Position,
        severity: Severity,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            file,
            position,
            severity,
            message: message.into(),
            rule: rule.into(),
        }
    }

    /// Create an error violation
    #[must_use]
    pub fn error(
        file: FileName,
        position: Position,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::new(file, position, Severity::Error, message, rule)
    }

    /// Create a warning violation
    #[must_use]
    pub fn warning(
        file: FileName,
        position: Position,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::new(file, position, Severity::Warning, message, rule)
    }

    /// Replace the severity of this violation
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// `file:line:column: message`
impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file, self.position.line, self.position.column, self.message
        )
    }
}
