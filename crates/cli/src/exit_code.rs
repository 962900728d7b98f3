//! Exit codes for the sass-order CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use sass_order_linter::Report;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no error-severity violations
    Success = 0,
    /// Ordering violations at error severity
    ViolationError = 1,
    /// Configuration error (unreadable or invalid config file)
    ConfigError = 2,
    /// I/O error (file read failure or a lost worker)
    IoError = 4,
    /// Parse error (malformed indentation)
    ParseError = 5,
}

impl ExitCode {
    /// Outcome of a finished lint run.
    ///
    /// I/O failures outrank parse failures, which outrank violations.
    #[must_use]
    pub fn for_report(report: &Report) -> Self {
        if report.has_io_errors() {
            Self::IoError
        } else if report.has_parse_errors() {
            Self::ParseError
        } else if report.error_count() > 0 {
            Self::ViolationError
        } else {
            Self::Success
        }
    }

    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ViolationError => write!(f, "ordering violations"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}
