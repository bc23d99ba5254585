//! Two-fund comparator.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::detail::{compare_metrics, MetricComparison, Winner};
use super::recommendation::{Confidence, InvestmentHorizon, Recommendation, RiskProfile};
use super::tradeoff::TradeOff;
use crate::metrics::{round2, FundMetrics, MetricKey};
use crate::scoring::{efficiency_score, EfficiencyInputs};

/// Name of the scoring model reported with every comparison.
pub const METHODOLOGY: &str = "Risk-Adjusted Efficiency Model";

/// Relative score gap (percentage points) below which funds tie.
pub const TIE_THRESHOLD: f64 = 5.0;

/// Strengths and weaknesses listed per side.
const KEY_METRIC_COUNT: usize = 3;

/// Relative and raw efficiency scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScores {
    /// Fund A's share of combined efficiency, 0–100.
    pub score_a: f64,
    /// Fund B's share of combined efficiency, 0–100.
    pub score_b: f64,
    /// Fund A's raw efficiency score.
    pub efficiency_a: f64,
    /// Fund B's raw efficiency score.
    pub efficiency_b: f64,
    /// Overall winner.
    pub winner: Winner,
    /// Scoring model name.
    pub methodology: String,
}

impl ComparisonScores {
    /// Scores two raw efficiencies against each other.
    #[must_use]
    pub fn from_efficiencies(efficiency_a: f64, efficiency_b: f64) -> Self {
        let total = efficiency_a + efficiency_b;
        let (score_a, score_b) = if total > 0.0 {
            (
                round2(efficiency_a / total * 100.0),
                round2(efficiency_b / total * 100.0),
            )
        } else {
            (50.0, 50.0)
        };

        let winner = if (score_a - score_b).abs() < TIE_THRESHOLD {
            Winner::Tie
        } else if score_a > score_b {
            Winner::A
        } else {
            Winner::B
        };

        Self {
            score_a,
            score_b,
            efficiency_a: round2(efficiency_a),
            efficiency_b: round2(efficiency_b),
            winner,
            methodology: METHODOLOGY.to_string(),
        }
    }

    /// Absolute gap between the relative scores.
    #[must_use]
    pub fn difference(&self) -> f64 {
        (self.score_a - self.score_b).abs()
    }
}

/// Full result of comparing two funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// First fund's name.
    pub fund_a_name: String,
    /// Second fund's name.
    pub fund_b_name: String,
    /// First fund's metrics.
    pub metrics_a: FundMetrics,
    /// Second fund's metrics.
    pub metrics_b: FundMetrics,
    /// Per-metric comparison, in fixed order.
    pub details: Vec<MetricComparison>,
    /// Efficiency scores.
    pub scores: ComparisonScores,
    /// Recommendation.
    pub recommendation: Recommendation,
}

impl ComparisonResult {
    /// The comparison row for `metric`, if compared.
    #[must_use]
    pub fn detail(&self, metric: MetricKey) -> Option<&MetricComparison> {
        self.details.iter().find(|d| d.metric == metric)
    }

    /// Name of the overall winner, `None` on a tie.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.scores.winner {
            Winner::A => Some(&self.fund_a_name),
            Winner::B => Some(&self.fund_b_name),
            Winner::Tie => None,
        }
    }
}

/// Compares two funds' metrics and recommends one.
///
/// Stateless; the same inputs always produce the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FundComparator;

impl FundComparator {
    /// Creates a comparator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compares fund A against fund B.
    #[must_use]
    pub fn compare(
        &self,
        metrics_a: &FundMetrics,
        metrics_b: &FundMetrics,
        name_a: &str,
        name_b: &str,
    ) -> ComparisonResult {
        let details = compare_metrics(metrics_a, metrics_b);
        let scores = ComparisonScores::from_efficiencies(
            efficiency_score(&EfficiencyInputs::from_metrics(metrics_a)),
            efficiency_score(&EfficiencyInputs::from_metrics(metrics_b)),
        );
        let recommendation =
            recommend(&details, &scores, metrics_a, metrics_b, name_a, name_b);

        info!(
            fund_a = name_a,
            fund_b = name_b,
            winner = ?scores.winner,
            "completed fund comparison"
        );

        ComparisonResult {
            fund_a_name: name_a.to_string(),
            fund_b_name: name_b.to_string(),
            metrics_a: metrics_a.clone(),
            metrics_b: metrics_b.clone(),
            details,
            scores,
            recommendation,
        }
    }
}

fn recommend(
    details: &[MetricComparison],
    scores: &ComparisonScores,
    metrics_a: &FundMetrics,
    metrics_b: &FundMetrics,
    name_a: &str,
    name_b: &str,
) -> Recommendation {
    let winner = scores.winner;
    let trade_off = TradeOff::select(details, winner);

    let (recommended_fund, confidence, reason, trade_off_analysis) = if winner.is_tie() {
        (
            "Both funds are equally matched".to_string(),
            Confidence::Low,
            "Efficiency scores are within 5% - no clear winner based on risk-adjusted analysis"
                .to_string(),
            trade_off.narrative(name_a),
        )
    } else {
        let name = winner.pick(name_a, name_b);
        let winning = winner.pick(metrics_a, metrics_b);
        let losing = winner.opponent().pick(metrics_a, metrics_b);
        (
            name.to_string(),
            Confidence::from_score_difference(scores.difference()),
            recommendation_reason(winning, losing),
            trade_off.narrative(name),
        )
    };

    // Fund A stands in for the profile on a tie.
    let profiled = winner.pick(metrics_a, metrics_b);
    let abs_drawdown = profiled.max_drawdown.abs();

    Recommendation {
        recommended_fund,
        confidence,
        reason,
        trade_off,
        trade_off_analysis,
        risk_profile: RiskProfile::classify(profiled.annual_volatility, abs_drawdown),
        suggested_investment_horizon: InvestmentHorizon::classify(
            profiled.sharpe_ratio,
            abs_drawdown,
        ),
        key_strengths: key_metrics(details, winner),
        key_weaknesses: key_metrics(details, winner.opponent()),
        overall_score_difference: round2(scores.difference()),
        methodology: scores.methodology.clone(),
    }
}

fn recommendation_reason(winning: &FundMetrics, losing: &FundMetrics) -> String {
    let sharpe_diff = winning.sharpe_ratio - losing.sharpe_ratio;
    let return_diff = winning.annual_return - losing.annual_return;

    if sharpe_diff > 0.3 {
        format!("Superior risk-adjusted returns (Sharpe: +{sharpe_diff:.2}) justify recommendation")
    } else if return_diff > 3.0 && sharpe_diff > 0.0 {
        format!("Better returns (+{return_diff:.1}%) with comparable or lower risk")
    } else {
        "Better overall efficiency based on multi-factor risk-return optimization".to_string()
    }
}

/// Metrics `side` won with a non-zero gap, largest first. Empty for a tie.
fn key_metrics(details: &[MetricComparison], side: Winner) -> Vec<MetricKey> {
    if side.is_tie() {
        return Vec::new();
    }
    let mut won: Vec<&MetricComparison> = details
        .iter()
        .filter(|d| d.winner == side && d.difference != 0.0)
        .collect();
    won.sort_by(|x, y| y.magnitude().total_cmp(&x.magnitude()));
    won.into_iter()
        .take(KEY_METRIC_COUNT)
        .map(|d| d.metric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_gap_is_tie() {
        // 52 vs 50 raw efficiency: 50.98 vs 49.02
        let scores = ComparisonScores::from_efficiencies(52.0, 50.0);
        assert_eq!(scores.winner, Winner::Tie);
        assert_eq!(scores.score_a, 50.98);
        assert_eq!(scores.score_b, 49.02);
    }

    #[test]
    fn test_zero_efficiencies_split_evenly() {
        let scores = ComparisonScores::from_efficiencies(0.0, 0.0);
        assert_eq!((scores.score_a, scores.score_b), (50.0, 50.0));
        assert_eq!(scores.winner, Winner::Tie);
    }

    #[test]
    fn test_clear_winner() {
        let scores = ComparisonScores::from_efficiencies(30.0, 60.0);
        assert_eq!(scores.winner, Winner::B);
        assert!((scores.difference() - 33.34).abs() < 1e-9);
    }
}
