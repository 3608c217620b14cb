//! Severity-tagged outcome reporting for publishing operations.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Severity of an operation outcome, ordered from least to most severe.
///
/// The ordering lets a batch of outcomes aggregate to its worst member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The operation succeeded with nothing to report.
    Ok,
    /// The operation succeeded or was a no-op worth noting.
    Info,
    /// The operation succeeded with caveats.
    Warning,
    /// The operation did not succeed.
    Error,
}

impl Severity {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Outcome report for an operation that can partially fail without raising
/// an error.
///
/// A status carries a severity, a human-readable message, and optionally
/// the underlying cause of a failure. Statuses are immutable, created as
/// the return value of an operation, and consumed synchronously by the
/// caller; they are never persisted. An [`Severity::Error`] status always
/// carries a non-empty message.
#[derive(Debug, Clone)]
pub struct Status {
    severity: Severity,
    message: String,
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl Status {
    /// Creates a status reporting plain success.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            severity: Severity::Ok,
            message: String::new(),
            cause: None,
        }
    }

    /// Creates an informational status.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: non_empty(message.into(), || "nothing further to report".to_owned()),
            cause: None,
        }
    }

    /// Creates a warning status.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: non_empty(message.into(), || "completed with warnings".to_owned()),
            cause: None,
        }
    }

    /// Creates an error status without an underlying cause.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: non_empty(message.into(), || "unspecified error".to_owned()),
            cause: None,
        }
    }

    /// Creates an error status carrying the underlying cause.
    ///
    /// An empty message falls back to the cause's own rendering, so an
    /// error status can never be message-less.
    #[must_use]
    pub fn error_with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        let source: Arc<dyn Error + Send + Sync> = Arc::new(cause);
        Self {
            severity: Severity::Error,
            message: non_empty(message.into(), || source.to_string()),
            cause: Some(source),
        }
    }

    /// Returns the outcome severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable message; empty only for OK statuses.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause of a failure, when one was recorded.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns whether this status reports plain success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.severity, Severity::Ok)
    }

    /// Returns whether this status reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            formatter.write_str(self.severity.as_str())
        } else {
            write!(formatter, "{}: {}", self.severity, self.message)
        }
    }
}

fn non_empty(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.trim().is_empty() {
        fallback()
    } else {
        message
    }
}
