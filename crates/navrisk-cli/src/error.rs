//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Analysis window must be at least one year.
    #[error("Invalid window: {0}. Use a whole number of years of at least 1.")]
    InvalidYears(u32),

    /// Risk-free rate outside the accepted range.
    #[error("Invalid risk-free rate: {0}. Must be between -50 and 100 percent.")]
    InvalidRate(f64),

    /// Top-N must be positive.
    #[error("Invalid top count: {0}. Must be at least 1.")]
    InvalidTop(usize),

    /// No category with this id.
    #[error("Unknown category: {0}. Run `navrisk categories` to list them.")]
    UnknownCategory(u32),

    /// The category needs a user-supplied search term.
    #[error("Category '{0}' needs a search term. Pass --query.")]
    MissingQuery(String),

    /// Data directory missing.
    #[error("Data directory not found: {}", .0.display())]
    DataDir(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
