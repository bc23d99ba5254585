//! # NavRisk Math
//!
//! Numerical kernel for the NavRisk analytics workspace.
//!
//! - **Moments**: mean, sample standard deviation, bias-corrected skewness
//!   and excess kurtosis
//! - **Quantiles**: percentiles with linear interpolation between ranks
//! - **Regression**: ordinary least squares fit with R²
//!
//! Functions that can be undefined for a given input (too few points, zero
//! variance) return `Option<f64>` rather than `NaN`; callers choose the
//! sentinel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{
        excess_kurtosis, linear_regression, mean, percentile, sample_std, skewness, LinearFit,
    };
}

pub use error::{MathError, MathResult};
