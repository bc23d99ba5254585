//! Risk and performance metrics.
//!
//! - [`returns`]: return-series kernels (monthly aggregation, drawdown,
//!   ratios, tail statistics)
//! - [`record`]: the typed [`FundMetrics`] record and its display names
//! - [`calculator`]: [`MetricsCalculator`], which turns a NAV series into a
//!   record
//!
//! Percentage metrics are stored ×100 and rounded to two decimals when the
//! record is built.

pub mod calculator;
pub mod record;
pub mod returns;

pub use calculator::MetricsCalculator;
pub use record::{AnalysisPeriod, FundMetrics, MetricKey, ScreeningMetrics};

/// Rounds to two decimal places, half away from zero.
///
/// Non-finite input collapses to the `0.0` sentinel.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Converts a fraction to a rounded percentage.
#[must_use]
pub fn pct2(fraction: f64) -> f64 {
    round2(fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_pct2() {
        assert_eq!(pct2(0.07), 7.0);
        assert_eq!(pct2(-0.12346), -12.35);
    }
}
