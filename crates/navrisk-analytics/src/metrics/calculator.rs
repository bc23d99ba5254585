//! Metrics calculator.

use tracing::debug;

use navrisk_core::NavSeries;
use navrisk_math::statistics::{excess_kurtosis, sample_std, skewness};

use super::record::{AnalysisPeriod, FundMetrics, ScreeningMetrics};
use super::returns::{
    annual_return, annual_volatility, compound, conditional_value_at_risk, downside_deviation,
    max_drawdown, month_end_values, sharpe_ratio, simple_returns, sortino_ratio, stability,
    tail_ratio, value_at_risk,
};
use super::{pct2, round2};
use crate::config::EngineConfig;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum NAV observations in the analysis window.
pub const MIN_OBSERVATIONS: usize = 30;

/// Minimum monthly returns in the analysis window.
pub const MIN_MONTHLY_RETURNS: usize = 2;

/// Tail cutoff for VaR and CVaR.
const VAR_CUTOFF: f64 = 0.05;

/// Computes [`FundMetrics`] from a NAV series.
///
/// Monthly returns drive the return, volatility, ratio and shape metrics;
/// daily returns drive drawdown and tail risk.
///
/// # Example
///
/// ```rust,ignore
/// use navrisk_analytics::prelude::*;
///
/// let calculator = MetricsCalculator::new(EngineConfig::default());
/// let metrics = calculator.compute(&series, Some(3))?;
/// println!("Sharpe: {}", metrics.sharpe_ratio);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    config: EngineConfig,
}

impl MetricsCalculator {
    /// Creates a calculator using `config`'s risk-free rate.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the full metrics record over a trailing window.
    ///
    /// `window_years` of `None` (or `Some(0)`) uses the full history.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InsufficientData` with fewer than 30 NAVs or
    /// fewer than two monthly returns in the window.
    pub fn compute(
        &self,
        series: &NavSeries,
        window_years: Option<u32>,
    ) -> AnalyticsResult<FundMetrics> {
        self.compute_with_rate(series, self.config.risk_free_rate, window_years)
    }

    /// Computes the full metrics record with an explicit annual risk-free rate.
    pub fn compute_with_rate(
        &self,
        series: &NavSeries,
        risk_free_rate: f64,
        window_years: Option<u32>,
    ) -> AnalyticsResult<FundMetrics> {
        let period = AnalysisPeriod::from_window(window_years);
        let window = match period.years() {
            Some(years) => series.trailing_years(years)?,
            None => series.clone(),
        };

        if window.len() < MIN_OBSERVATIONS {
            return Err(AnalyticsError::insufficient_data(format!(
                "too few days for {period} analysis (need at least {MIN_OBSERVATIONS}, got {})",
                window.len()
            )));
        }

        let monthly = simple_returns(&month_end_values(window.points()));
        if monthly.len() < MIN_MONTHLY_RETURNS {
            return Err(AnalyticsError::insufficient_data(format!(
                "too few months for {period} analysis (need at least {MIN_MONTHLY_RETURNS}, got {})",
                monthly.len()
            )));
        }

        let navs = window.values();
        let daily = simple_returns(&navs);
        let rf_month = (1.0 + risk_free_rate).powf(1.0 / 12.0) - 1.0;

        // Length checks above guarantee both endpoints exist.
        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return Err(AnalyticsError::insufficient_data("empty NAV series"));
        };

        let annual = pct2(annual_return(&monthly).unwrap_or(0.0));
        let drawdown = pct2(max_drawdown(&daily));
        let calmar = if drawdown == 0.0 {
            0.0
        } else {
            round2(annual / drawdown.abs())
        };

        let metrics = FundMetrics {
            total_return: pct2(navs[navs.len() - 1] / navs[0] - 1.0),
            annual_return: annual,
            cumulative_return: pct2(compound(&monthly) - 1.0),
            annual_volatility: pct2(annual_volatility(&monthly).unwrap_or(0.0)),
            monthly_volatility: pct2(sample_std(&monthly).unwrap_or(0.0)),
            sharpe_ratio: round2(sharpe_ratio(&monthly, rf_month).unwrap_or(0.0)),
            sortino_ratio: round2(sortino_ratio(&monthly, rf_month).unwrap_or(0.0)),
            calmar_ratio: calmar,
            max_drawdown: drawdown,
            var_95: pct2(value_at_risk(&daily, VAR_CUTOFF).unwrap_or(0.0)),
            cvar_95: pct2(conditional_value_at_risk(&daily, VAR_CUTOFF).unwrap_or(0.0)),
            downside_deviation: pct2(downside_deviation(&monthly).unwrap_or(0.0)),
            skewness: round2(skewness(&monthly).unwrap_or(0.0)),
            kurtosis: round2(excess_kurtosis(&monthly).unwrap_or(0.0)),
            stability: round2(stability(&monthly).unwrap_or(0.0)),
            tail_ratio: round2(tail_ratio(&monthly).unwrap_or(0.0)),
            analysis_period: period,
            start_date: first.date,
            end_date: last.date,
            total_days: window.len(),
            total_months: monthly.len(),
            risk_free_rate: pct2(risk_free_rate),
        };

        debug!(
            start = %metrics.start_date,
            end = %metrics.end_date,
            months = metrics.total_months,
            "computed fund metrics"
        );
        Ok(metrics)
    }

    /// Computes the screening subset over a trailing window.
    pub fn screening_metrics(
        &self,
        series: &NavSeries,
        window_years: u32,
    ) -> AnalyticsResult<ScreeningMetrics> {
        self.compute(series, Some(window_years))
            .map(|metrics| metrics.screening())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navrisk_core::Date;

    fn weekly_series(weeks: usize, growth: f64) -> NavSeries {
        let start = Date::from_ymd(2020, 1, 6).unwrap();
        NavSeries::from_pairs(
            (0..weeks).map(|i| (start.add_days(7 * i as i64), 10.0 * (1.0 + growth).powi(i as i32))),
        )
        .unwrap()
    }

    #[test]
    fn test_compute_basic_record() {
        let series = weekly_series(120, 0.002);
        let metrics = MetricsCalculator::default().compute(&series, None).unwrap();

        assert_eq!(metrics.analysis_period, AnalysisPeriod::FullHistory);
        assert_eq!(metrics.total_days, 120);
        assert_eq!(metrics.max_drawdown, 0.0);
        assert_eq!(metrics.calmar_ratio, 0.0);
        assert_eq!(metrics.downside_deviation, 0.0);
        assert_eq!(metrics.risk_free_rate, 7.0);
        assert!(metrics.total_return > 0.0);
    }

    #[test]
    fn test_too_few_days() {
        let series = weekly_series(29, 0.001);
        let err = MetricsCalculator::default().compute(&series, None).unwrap_err();
        assert!(err.is_insufficient_data());
        assert!(err.to_string().contains("got 29"));
    }

    #[test]
    fn test_too_few_months() {
        // 30 consecutive days starting mid-month span two calendar months
        let start = Date::from_ymd(2024, 1, 15).unwrap();
        let series =
            NavSeries::from_pairs((0..30).map(|i| (start.add_days(i), 10.0 + i as f64 * 0.01)))
                .unwrap();
        let err = MetricsCalculator::default().compute(&series, None).unwrap_err();
        assert!(err.to_string().contains("too few months"));
    }

    #[test]
    fn test_window_zero_is_full_history() {
        let series = weekly_series(60, 0.001);
        let calculator = MetricsCalculator::default();
        let full = calculator.compute(&series, None).unwrap();
        let zero = calculator.compute(&series, Some(0)).unwrap();
        assert_eq!(full, zero);
    }

    #[test]
    fn test_screening_metrics_subset() {
        let series = weekly_series(120, 0.002);
        let calculator = MetricsCalculator::default();
        let full = calculator.compute(&series, Some(1)).unwrap();
        let subset = calculator.screening_metrics(&series, 1).unwrap();
        assert_eq!(subset.annual_return, full.annual_return);
        assert_eq!(subset.volatility, full.annual_volatility);
        assert_eq!(subset.months_analyzed, full.total_months);
    }
}
