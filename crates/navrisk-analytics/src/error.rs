//! Error types for the analytics engine.

use thiserror::Error;

use navrisk_core::CoreError;
use navrisk_math::MathError;
use navrisk_traits::SourceError;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised by the metrics, comparison and screening pipeline.
///
/// Numeric degenerate cases (zero-denominator ratios) never surface here;
/// they resolve to sentinel values inside the metrics record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Too few observations or months for the requested window
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Failure reported by the data source
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Invalid domain value
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Numerical routine rejected its input
    #[error(transparent)]
    Math(#[from] MathError),

    /// Engine configuration out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalyticsError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData(reason.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// True when the error means "not enough history", the one failure a
    /// screener expects to see routinely.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_pass_through_unmodified() {
        let err: AnalyticsError = SourceError::NotFound("999999".into()).into();
        assert_eq!(err.to_string(), "scheme not found: 999999");
        assert!(matches!(err, AnalyticsError::Source(SourceError::NotFound(_))));
    }

    #[test]
    fn test_insufficient_data() {
        let err = AnalyticsError::insufficient_data("too few days");
        assert!(err.is_insufficient_data());
        assert_eq!(err.to_string(), "insufficient data: too few days");
    }
}
