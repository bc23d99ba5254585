//! Property-based tests for scoring and metric invariants.
//!
//! - The efficiency score is never negative
//! - More volatility or deeper drawdown never raises the score
//! - Drawdown is never positive
//! - Swapping the funds mirrors the comparison

use proptest::prelude::*;

use navrisk_analytics::metrics::returns::{max_drawdown, simple_returns};
use navrisk_analytics::prelude::*;
use navrisk_core::{Date, NavSeries};

// =============================================================================
// STRATEGIES
// =============================================================================

fn arb_inputs() -> impl Strategy<Value = EfficiencyInputs> {
    (
        -30.0..60.0_f64,
        -2.0..4.0_f64,
        -2.0..5.0_f64,
        -1.0..4.0_f64,
        0.0..60.0_f64,
        0.0..80.0_f64,
    )
        .prop_map(|(ret, sharpe, sortino, calmar, vol, dd)| EfficiencyInputs {
            annual_return_pct: ret,
            sharpe,
            sortino,
            calmar,
            annual_vol_pct: vol,
            abs_max_drawdown_pct: dd,
        })
}

/// Weekly NAVs driven by a vector of returns in [-5%, +5%].
fn arb_series() -> impl Strategy<Value = NavSeries> {
    prop::collection::vec(-0.05..0.05_f64, 40..160).prop_map(|returns| {
        let start = Date::from_ymd(2020, 1, 6).unwrap();
        let mut nav = 50.0;
        let pairs: Vec<(Date, f64)> = returns
            .iter()
            .enumerate()
            .map(|(i, r)| {
                nav *= 1.0 + r;
                (start.add_days(7 * i as i64), nav)
            })
            .collect();
        NavSeries::from_pairs(pairs).unwrap()
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_score_is_non_negative(inputs in arb_inputs()) {
        prop_assert!(efficiency_score(&inputs) >= 0.0);
    }

    #[test]
    fn prop_score_non_increasing_in_volatility(inputs in arb_inputs(), bump in 0.0..40.0_f64) {
        let riskier = EfficiencyInputs {
            annual_vol_pct: inputs.annual_vol_pct + bump,
            ..inputs
        };
        prop_assert!(efficiency_score(&riskier) <= efficiency_score(&inputs) + 1e-9);
    }

    #[test]
    fn prop_score_non_increasing_in_drawdown(inputs in arb_inputs(), bump in 0.0..40.0_f64) {
        let riskier = EfficiencyInputs {
            abs_max_drawdown_pct: inputs.abs_max_drawdown_pct + bump,
            ..inputs
        };
        prop_assert!(efficiency_score(&riskier) <= efficiency_score(&inputs) + 1e-9);
    }

    #[test]
    fn prop_drawdown_never_positive(returns in prop::collection::vec(-0.2..0.2_f64, 0..200)) {
        let dd = max_drawdown(&returns);
        prop_assert!(dd <= 0.0);
        prop_assert!(dd >= -1.0);
    }

    #[test]
    fn prop_metrics_are_finite(series in arb_series()) {
        let values = series.values();
        prop_assert_eq!(simple_returns(&values).len(), values.len() - 1);

        let metrics = MetricsCalculator::default().compute(&series, None).unwrap();
        for (key, value) in metrics.numeric() {
            prop_assert!(value.is_finite(), "{} = {}", key, value);
        }
        prop_assert!(metrics.max_drawdown <= 0.0);
    }

    #[test]
    fn prop_comparison_is_mirrored(a in arb_series(), b in arb_series()) {
        let calculator = MetricsCalculator::default();
        let ma = calculator.compute(&a, None).unwrap();
        let mb = calculator.compute(&b, None).unwrap();

        let ab = FundComparator::new().compare(&ma, &mb, "A", "B");
        let ba = FundComparator::new().compare(&mb, &ma, "B", "A");

        prop_assert_eq!(ab.scores.score_a, ba.scores.score_b);
        prop_assert_eq!(ab.scores.winner.opponent(), ba.scores.winner);
        prop_assert!(ab.scores.score_a >= 0.0 && ab.scores.score_a <= 100.0);
    }
}
