//! Severity of reported violations.

/// Severity level of a violation.
///
/// Rules report at their configured severity. Only errors make the
/// command-line run fail; warnings are printed and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Violation fails the run (default)
    #[default]
    Error,
    /// Violation is reported but does not fail the run
    Warning,
}

impl Severity {
    /// Returns true if this severity indicates an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}
