//! Risk-adjusted efficiency model.
//!
//! Three parts:
//! - capped Sharpe, Sortino and Calmar ratios (60%)
//! - log-scaled annual return, so each extra point of return adds less (25%)
//! - a superlinear volatility and drawdown penalty (15%, subtracted)
//!
//! The score is floored at zero and never rises when volatility or drawdown
//! rise with everything else held fixed.

use serde::{Deserialize, Serialize};

use crate::metrics::FundMetrics;

const SHARPE_WEIGHT: f64 = 0.40;
const SORTINO_WEIGHT: f64 = 0.35;
const CALMAR_WEIGHT: f64 = 0.25;

const SHARPE_CAP: f64 = 2.0;
const SORTINO_CAP: f64 = 2.5;
const CALMAR_CAP: f64 = 2.0;

const RISK_ADJUSTED_WEIGHT: f64 = 0.60;
const RETURN_WEIGHT: f64 = 0.25;
const PENALTY_WEIGHT: f64 = 0.15;

const VOLATILITY_SCALE: f64 = 20.0;
const DRAWDOWN_SCALE: f64 = 30.0;
const PENALTY_CAP: f64 = 50.0;

/// Inputs to [`efficiency_score`]. Percentages are ×100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EfficiencyInputs {
    /// Annual Return (%)
    pub annual_return_pct: f64,
    /// Sharpe Ratio
    pub sharpe: f64,
    /// Sortino Ratio
    pub sortino: f64,
    /// Calmar Ratio
    pub calmar: f64,
    /// Annual Volatility (%)
    pub annual_vol_pct: f64,
    /// |Max Drawdown (%)|
    pub abs_max_drawdown_pct: f64,
}

impl EfficiencyInputs {
    /// Extracts the scorer inputs from a metrics record.
    #[must_use]
    pub fn from_metrics(metrics: &FundMetrics) -> Self {
        Self {
            annual_return_pct: metrics.annual_return,
            sharpe: metrics.sharpe_ratio,
            sortino: metrics.sortino_ratio,
            calmar: metrics.calmar_ratio,
            annual_vol_pct: metrics.annual_volatility,
            abs_max_drawdown_pct: metrics.max_drawdown.abs(),
        }
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Capped ratio contribution on a 0–100 scale; non-positive ratios add nothing.
fn capped(ratio: f64, cap: f64) -> f64 {
    if ratio > 0.0 {
        (ratio / cap).min(1.0) * 100.0
    } else {
        0.0
    }
}

fn penalty(value: f64, scale: f64) -> f64 {
    if value > 0.0 {
        ((value / scale).powf(1.5) * PENALTY_CAP).min(PENALTY_CAP)
    } else {
        0.0
    }
}

/// Risk-adjusted sub-score, 0–100.
#[must_use]
pub fn risk_adjusted_component(inputs: &EfficiencyInputs) -> f64 {
    SHARPE_WEIGHT * capped(finite_or_zero(inputs.sharpe), SHARPE_CAP)
        + SORTINO_WEIGHT * capped(finite_or_zero(inputs.sortino), SORTINO_CAP)
        + CALMAR_WEIGHT * capped(finite_or_zero(inputs.calmar), CALMAR_CAP)
}

/// Log-scaled return sub-score; about 43 at 10%, 100 at 40%.
#[must_use]
pub fn return_component(annual_return_pct: f64) -> f64 {
    let r = finite_or_zero(annual_return_pct);
    if r > 0.0 {
        (r / 10.0).ln_1p() / 4.0_f64.ln_1p() * 100.0
    } else {
        0.0
    }
}

/// Weighted volatility and drawdown penalty, 0–50.
#[must_use]
pub fn risk_penalty(annual_vol_pct: f64, abs_max_drawdown_pct: f64) -> f64 {
    0.4 * penalty(finite_or_zero(annual_vol_pct), VOLATILITY_SCALE)
        + 0.6 * penalty(finite_or_zero(abs_max_drawdown_pct), DRAWDOWN_SCALE)
}

/// Efficiency score of a fund, ≥ 0.
///
/// # Example
///
/// ```rust
/// use navrisk_analytics::scoring::{efficiency_score, EfficiencyInputs};
///
/// let calm = EfficiencyInputs { annual_return_pct: 12.0, sharpe: 1.2, sortino: 1.6,
///     calmar: 0.8, annual_vol_pct: 10.0, abs_max_drawdown_pct: 12.0 };
/// let wild = EfficiencyInputs { annual_vol_pct: 30.0, abs_max_drawdown_pct: 40.0, ..calm };
/// assert!(efficiency_score(&calm) > efficiency_score(&wild));
/// ```
#[must_use]
pub fn efficiency_score(inputs: &EfficiencyInputs) -> f64 {
    let score = RISK_ADJUSTED_WEIGHT * risk_adjusted_component(inputs)
        + RETURN_WEIGHT * return_component(inputs.annual_return_pct)
        - PENALTY_WEIGHT * risk_penalty(inputs.annual_vol_pct, inputs.abs_max_drawdown_pct);
    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_zero_is_zero() {
        assert_eq!(efficiency_score(&EfficiencyInputs::default()), 0.0);
    }

    #[test]
    fn test_return_component_anchors() {
        assert_relative_eq!(return_component(10.0), 2.0_f64.ln() / 5.0_f64.ln() * 100.0, epsilon = 1e-12);
        assert_relative_eq!(return_component(40.0), 100.0, epsilon = 1e-12);
        assert_eq!(return_component(-5.0), 0.0);
    }

    #[test]
    fn test_ratios_are_capped() {
        let inputs = EfficiencyInputs {
            sharpe: 5.0,
            sortino: 9.0,
            calmar: 4.0,
            ..Default::default()
        };
        assert_relative_eq!(risk_adjusted_component(&inputs), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_ratios_contribute_nothing() {
        let inputs = EfficiencyInputs {
            sharpe: -1.0,
            sortino: -2.0,
            calmar: -0.5,
            ..Default::default()
        };
        assert_eq!(risk_adjusted_component(&inputs), 0.0);
    }

    #[test]
    fn test_worked_example() {
        let inputs = EfficiencyInputs {
            annual_return_pct: 15.0,
            sharpe: 1.0,
            sortino: 1.25,
            calmar: 1.0,
            annual_vol_pct: 20.0,
            abs_max_drawdown_pct: 30.0,
        };
        // risk-adjusted = 50; penalty = 0.4*50 + 0.6*50 = 50
        let expected = 0.6 * 50.0 + 0.25 * (2.5_f64.ln() / 5.0_f64.ln() * 100.0) - 0.15 * 50.0;
        assert_relative_eq!(efficiency_score(&inputs), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_inputs_treated_as_zero() {
        let inputs = EfficiencyInputs {
            sharpe: f64::NAN,
            annual_vol_pct: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(efficiency_score(&inputs), 0.0);
    }
}
