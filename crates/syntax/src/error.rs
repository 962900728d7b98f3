use sass_order_types::Position;
use thiserror::Error;

/// Why a file could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The indentation of a line cannot be mapped onto the nesting seen so far
    #[error("malformed indentation")]
    MalformedIndentation,
}

/// A line whose shape broke the parser's nesting invariants.
///
/// Parse errors stop the analysis of one file only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {reason}: `{text}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line number
    pub line: usize,
    /// Indentation width of the line
    pub column: usize,
    pub reason: &'static str,
    /// The offending line, trimmed
    pub text: String,
}

impl ParseError {
    pub(crate) fn malformed_indentation(
        position: Position,
        reason: &'static str,
        text: &str,
    ) -> Self {
        Self {
            kind: ParseErrorKind::MalformedIndentation,
            line: position.line,
            column: position.column,
            reason,
            text: text.to_string(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::malformed_indentation(
            Position::new(4, 0),
            "dedent past the top level",
            ".d",
        );
        assert_eq!(
            err.to_string(),
            "malformed indentation at line 4: dedent past the top level: `.d`"
        );
        assert_eq!(err.position(), Position::new(4, 0));
    }
}
