//! File-related types: [`FileName`], [`Syntax`].

use std::path::Path;
use std::sync::Arc;

/// Display name of a linted input.
///
/// Used verbatim in reports: a path as given on the command line, a path
/// relative to the working directory, or `stdin`. Cheap to clone, since every
/// violation of a file carries one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(Arc<str>);

impl FileName {
    /// Name used for text read from standard input.
    pub const STDIN: &'static str = "stdin";

    /// Create a new `FileName` from a string.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Create a `FileName` from a path, lossily converting non-UTF-8 parts.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self(Arc::from(path.to_string_lossy().as_ref()))
    }

    /// The name used for standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(Self::STDIN)
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Stylesheet syntax of a file (determined by extension).
///
/// Only the indented syntax can be linted: nesting is inferred from
/// indentation, so brace-delimited files parse into a flat, meaningless tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Indented syntax (.sass)
    Indented,
    /// Brace syntax (.scss, .css)
    Braces,
}

impl Syntax {
    /// Detect syntax from a file path based on its extension.
    ///
    /// Returns `None` if the extension is not a stylesheet extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;

        match extension {
            "sass" => Some(Self::Indented),
            "scss" | "css" => Some(Self::Braces),
            _ => None,
        }
    }

    /// Check if files of this syntax can be linted.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Indented)
    }
}
