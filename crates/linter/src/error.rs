use sass_order_syntax::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single file could not be linted
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The worker linting this file stopped before reporting a result
    #[error("worker thread stopped before linting this file")]
    Worker,
}

impl LintError {
    /// Failures outside the parser (unreadable file or lost worker)
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Worker)
    }

    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
