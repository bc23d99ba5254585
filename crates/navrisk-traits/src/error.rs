//! Error types for data source operations.

use thiserror::Error;

use navrisk_core::CoreError;

/// Errors raised by NAV and scheme data sources.
///
/// `NotFound` and `Transient` are kept apart so callers can tell a bad scheme
/// code from a flaky upstream. Retrying transient failures is the source's
/// job, never the analytics engine's.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    /// Requested scheme does not exist
    #[error("scheme not found: {0}")]
    NotFound(String),

    /// Network or upstream server failure
    #[error("transient fetch failure: {0}")]
    Transient(String),

    /// Payload could not be parsed into a NAV series or listing
    #[error("parse error: {0}")]
    Parse(String),

    /// Local IO failure
    #[error("IO error: {0}")]
    Io(String),
}

impl SourceError {
    /// True for failures worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, SourceError::Transient(_))
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e.to_string())
    }
}

impl From<CoreError> for SourceError {
    fn from(e: CoreError) -> Self {
        SourceError::Parse(e.to_string())
    }
}
