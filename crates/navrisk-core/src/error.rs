//! Error types for the core domain types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an out-of-range date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A NAV series that violates ordering or positivity.
    #[error("Invalid NAV series: {reason}")]
    InvalidSeries {
        /// Description of the violated invariant.
        reason: String,
    },

    /// A NAV value that cannot be represented or parsed.
    #[error("Invalid NAV value: {value}")]
    InvalidNav {
        /// The offending raw value.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Creates an invalid NAV error.
    #[must_use]
    pub fn invalid_nav(value: impl Into<String>) -> Self {
        Self::InvalidNav {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2025-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2025-02-30");

        let err = CoreError::invalid_series("duplicate date 2024-01-01");
        assert!(err.to_string().contains("duplicate date"));
    }
}
