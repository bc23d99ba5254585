//! Return-series kernels.
//!
//! All functions work on fractional returns (0.01 = 1%) and return
//! fractions; scaling to percentages happens in the calculator. Undefined
//! results come back as `None` so the caller picks the sentinel.

use navrisk_core::NavPoint;
use navrisk_math::statistics::{linear_regression, mean, percentile, sample_std};

/// Periods per year for monthly data.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Period-over-period fractional change of consecutive values.
#[must_use]
pub fn simple_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Last value in each calendar month, from the first observed month to the
/// last.
///
/// Months without an observation repeat the previous month-end value, so
/// the corresponding monthly return is zero.
#[must_use]
pub fn month_end_values(points: &[NavPoint]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    let mut current_month: Option<i32> = None;

    for point in points {
        let month = point.date.month_index();
        match current_month {
            Some(m) if m == month => {
                if let Some(last) = out.last_mut() {
                    *last = point.nav_f64();
                }
            }
            Some(m) => {
                let carried = out.last().copied().unwrap_or(point.nav_f64());
                for _ in (m + 1)..month {
                    out.push(carried);
                }
                out.push(point.nav_f64());
                current_month = Some(month);
            }
            None => {
                out.push(point.nav_f64());
                current_month = Some(month);
            }
        }
    }
    out
}

/// Growth of one unit over the series: `Π(1 + r)`.
#[must_use]
pub fn compound(returns: &[f64]) -> f64 {
    returns.iter().map(|r| 1.0 + r).product()
}

/// Compound annual growth rate of monthly returns.
#[must_use]
pub fn annual_return(monthly: &[f64]) -> Option<f64> {
    if monthly.is_empty() {
        return None;
    }
    let years = monthly.len() as f64 / MONTHS_PER_YEAR;
    Some(compound(monthly).powf(1.0 / years) - 1.0)
}

/// Annualised sample volatility of monthly returns.
#[must_use]
pub fn annual_volatility(monthly: &[f64]) -> Option<f64> {
    sample_std(monthly).map(|s| s * MONTHS_PER_YEAR.sqrt())
}

/// Maximum peak-to-trough decline of the wealth curve built from `returns`.
///
/// The starting value counts as the first peak. Result is ≤ 0.
#[must_use]
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut wealth = 1.0_f64;
    let mut peak = 1.0_f64;
    let mut worst = 0.0_f64;
    for r in returns {
        wealth *= 1.0 + r;
        peak = peak.max(wealth);
        worst = worst.min(wealth / peak - 1.0);
    }
    worst
}

/// Annualised Sharpe ratio of monthly returns over a per-month risk-free rate.
#[must_use]
pub fn sharpe_ratio(monthly: &[f64], rf_month: f64) -> Option<f64> {
    let excess: Vec<f64> = monthly.iter().map(|r| r - rf_month).collect();
    let sd = sample_std(&excess)?;
    if sd == 0.0 {
        return None;
    }
    Some(mean(&excess)? / sd * MONTHS_PER_YEAR.sqrt())
}

/// Annualised downside risk below `required`: root mean square of the
/// shortfalls over all periods.
#[must_use]
pub fn downside_risk(monthly: &[f64], required: f64) -> Option<f64> {
    if monthly.is_empty() {
        return None;
    }
    let shortfalls: Vec<f64> = monthly
        .iter()
        .map(|r| (r - required).min(0.0).powi(2))
        .collect();
    Some(mean(&shortfalls)?.sqrt() * MONTHS_PER_YEAR.sqrt())
}

/// Annualised Sortino ratio against a per-month required return.
#[must_use]
pub fn sortino_ratio(monthly: &[f64], required: f64) -> Option<f64> {
    let excess: Vec<f64> = monthly.iter().map(|r| r - required).collect();
    let risk = downside_risk(monthly, required)?;
    if risk == 0.0 {
        return None;
    }
    Some(mean(&excess)? * MONTHS_PER_YEAR / risk)
}

/// Annualised sample deviation of the negative monthly returns.
///
/// Needs at least two negative months.
#[must_use]
pub fn downside_deviation(monthly: &[f64]) -> Option<f64> {
    let negatives: Vec<f64> = monthly.iter().copied().filter(|r| *r < 0.0).collect();
    annual_volatility(&negatives)
}

/// Return at the `cutoff` quantile (0.05 for 95% VaR).
#[must_use]
pub fn value_at_risk(returns: &[f64], cutoff: f64) -> Option<f64> {
    percentile(returns, cutoff * 100.0)
}

/// Mean of the worst `floor((n − 1) · cutoff) + 1` returns.
#[must_use]
pub fn conditional_value_at_risk(returns: &[f64], cutoff: f64) -> Option<f64> {
    if returns.is_empty() {
        return None;
    }
    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);
    let count = ((sorted.len() - 1) as f64 * cutoff).floor() as usize + 1;
    mean(&sorted[..count])
}

/// R² of a straight-line fit to the cumulative log-return curve.
#[must_use]
pub fn stability(monthly: &[f64]) -> Option<f64> {
    let curve: Vec<f64> = monthly
        .iter()
        .scan(0.0, |acc, r| {
            *acc += r.ln_1p();
            Some(*acc)
        })
        .collect();
    let xs: Vec<f64> = (0..curve.len()).map(|i| i as f64).collect();
    linear_regression(&xs, &curve).ok().map(|fit| fit.r_squared())
}

/// Ratio of the right tail (95th percentile) to the left tail (5th).
#[must_use]
pub fn tail_ratio(monthly: &[f64]) -> Option<f64> {
    let right = percentile(monthly, 95.0)?;
    let left = percentile(monthly, 5.0)?;
    if left == 0.0 {
        return None;
    }
    Some(right.abs() / left.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use navrisk_core::{Date, NavPoint};

    fn point(y: i32, m: u32, d: u32, nav: f64) -> NavPoint {
        NavPoint::from_f64(Date::from_ymd(y, m, d).unwrap(), nav).unwrap()
    }

    #[test]
    fn test_simple_returns() {
        let r = simple_returns(&[100.0, 110.0, 99.0]);
        assert_relative_eq!(r[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(r[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_month_end_values_keeps_last_and_fills_gaps() {
        let points = [
            point(2024, 1, 10, 10.0),
            point(2024, 1, 31, 11.0),
            // February missing
            point(2024, 3, 15, 12.0),
            point(2024, 3, 28, 12.5),
        ];
        let values = month_end_values(&points);
        assert_eq!(values.len(), 3);
        assert_relative_eq!(values[0], 11.0);
        assert_relative_eq!(values[1], 11.0);
        assert_relative_eq!(values[2], 12.5);
    }

    #[test]
    fn test_annual_return_twelve_months() {
        let monthly = [0.01; 12];
        assert_relative_eq!(
            annual_return(&monthly).unwrap(),
            1.01_f64.powi(12) - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_max_drawdown_includes_start_as_peak() {
        // Immediate loss from the starting value
        assert_relative_eq!(max_drawdown(&[-0.10, 0.05]), -0.10, epsilon = 1e-12);
        // 100 -> 120 -> 90 -> 130
        let r = simple_returns(&[100.0, 120.0, 90.0, 130.0]);
        assert_relative_eq!(max_drawdown(&r), -0.25, epsilon = 1e-12);
        assert_eq!(max_drawdown(&[0.01, 0.02]), 0.0);
    }

    #[test]
    fn test_sharpe_undefined_for_constant_returns() {
        assert!(sharpe_ratio(&[0.01; 6], 0.005).is_none());
    }

    #[test]
    fn test_sortino_undefined_without_shortfall() {
        assert!(sortino_ratio(&[0.02, 0.03, 0.04], 0.005).is_none());
        let ratio = sortino_ratio(&[0.02, -0.01, 0.03], 0.0).unwrap();
        // mean = 0.013333, downside rms = sqrt(0.0001 / 3)
        let expected = (0.04 / 3.0) * 12.0 / ((0.0001_f64 / 3.0).sqrt() * 12.0_f64.sqrt());
        assert_relative_eq!(ratio, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_downside_deviation_needs_two_negatives() {
        assert!(downside_deviation(&[0.01, -0.02, 0.03]).is_none());
        assert!(downside_deviation(&[0.01, 0.02]).is_none());
        assert!(downside_deviation(&[-0.01, -0.03, 0.02]).is_some());
    }

    #[test]
    fn test_var_and_cvar() {
        let returns: Vec<f64> = (1..=21).map(|i| f64::from(i) / 100.0 - 0.11).collect();
        // sorted: -0.10 ..= 0.10, rank 0.05 * 20 = 1
        assert_relative_eq!(value_at_risk(&returns, 0.05).unwrap(), -0.09, epsilon = 1e-12);
        // floor(20 * 0.05) + 1 = 2 worst values
        assert_relative_eq!(
            conditional_value_at_risk(&returns, 0.05).unwrap(),
            -0.095,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_stability_of_constant_growth_is_one() {
        assert_relative_eq!(stability(&[0.01; 12]).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tail_ratio_symmetric() {
        let returns = [-0.02, -0.01, 0.0, 0.01, 0.02];
        assert_relative_eq!(tail_ratio(&returns).unwrap(), 1.0, epsilon = 1e-12);
        assert!(tail_ratio(&[0.0, 0.0, 0.0]).is_none());
    }
}
