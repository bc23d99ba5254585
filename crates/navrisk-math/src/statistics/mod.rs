//! Descriptive statistics over `f64` samples.

mod moments;
mod quantile;
mod regression;

pub use moments::{excess_kurtosis, mean, sample_std, skewness};
pub use quantile::percentile;
pub use regression::{linear_regression, LinearFit};
