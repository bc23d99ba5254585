//! Trade-off narrative.
//!
//! Rules are tried in order and the first match wins. Reordering them
//! changes which narrative identical inputs produce.
//!
//! 1. Winner gave up return but won on Sharpe:
//!    a. small return gap, large Sharpe gap: [`TradeOff::RiskAdjustedSacrifice`]
//!    b. otherwise, a meaningful volatility or drawdown gap: [`TradeOff::LowerRisk`]
//! 2. Winner won on return and on Sharpe or volatility: [`TradeOff::Dominant`]
//! 3. Winner won on return, lost on Sharpe, large return gap and small Sharpe
//!    gap: [`TradeOff::ReturnJustifiesRisk`]
//! 4. [`TradeOff::Efficiency`]

use serde::{Deserialize, Serialize};

use super::detail::{MetricComparison, Winner};
use crate::metrics::MetricKey;

/// Which trade-off the recommended fund represents, with the absolute
/// differences the narrative quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeOff {
    /// Slightly lower return for a much better Sharpe ratio.
    RiskAdjustedSacrifice {
        /// Annual return given up (percentage points).
        return_diff: f64,
        /// Sharpe advantage.
        sharpe_diff: f64,
    },
    /// Lower return, but noticeably lower volatility or drawdown.
    LowerRisk {
        /// Volatility gap (percentage points).
        vol_diff: f64,
        /// Drawdown gap (percentage points).
        dd_diff: f64,
        /// Annual return given up (percentage points).
        return_diff: f64,
    },
    /// Higher return and better risk.
    Dominant {
        /// Annual return advantage (percentage points).
        return_diff: f64,
    },
    /// Much higher return for marginally worse risk-adjusted performance.
    ReturnJustifiesRisk {
        /// Annual return advantage (percentage points).
        return_diff: f64,
        /// Sharpe gap.
        sharpe_diff: f64,
    },
    /// No single dimension explains the result.
    Efficiency,
    /// Overall result was a tie.
    Balanced,
}

/// Winner and absolute difference for `key`; a missing metric reads as a
/// zero-difference tie.
fn lookup(details: &[MetricComparison], key: MetricKey) -> (Winner, f64) {
    details
        .iter()
        .find(|d| d.metric == key)
        .map_or((Winner::Tie, 0.0), |d| (d.winner, d.magnitude()))
}

impl TradeOff {
    /// Selects the trade-off for the overall `winner`.
    #[must_use]
    pub fn select(details: &[MetricComparison], winner: Winner) -> TradeOff {
        if winner.is_tie() {
            return TradeOff::Balanced;
        }

        let (return_winner, return_diff) = lookup(details, MetricKey::AnnualReturn);
        let (sharpe_winner, sharpe_diff) = lookup(details, MetricKey::SharpeRatio);
        let (vol_winner, vol_diff) = lookup(details, MetricKey::AnnualVolatility);
        let (_, dd_diff) = lookup(details, MetricKey::MaxDrawdown);

        if return_winner != winner && sharpe_winner == winner {
            if return_diff < 3.0 && sharpe_diff > 0.3 {
                return TradeOff::RiskAdjustedSacrifice {
                    return_diff,
                    sharpe_diff,
                };
            }
            if vol_diff > 3.0 || dd_diff > 5.0 {
                return TradeOff::LowerRisk {
                    vol_diff,
                    dd_diff,
                    return_diff,
                };
            }
        }

        if return_winner == winner && (sharpe_winner == winner || vol_winner == winner) {
            return TradeOff::Dominant { return_diff };
        }

        if return_winner == winner
            && sharpe_winner != winner
            && return_diff > 5.0
            && sharpe_diff < 0.2
        {
            return TradeOff::ReturnJustifiesRisk {
                return_diff,
                sharpe_diff,
            };
        }

        TradeOff::Efficiency
    }

    /// Human-readable narrative naming the recommended fund.
    #[must_use]
    pub fn narrative(&self, winner_name: &str) -> String {
        match *self {
            TradeOff::RiskAdjustedSacrifice {
                return_diff,
                sharpe_diff,
            } => format!(
                "{winner_name} sacrifices {return_diff:.1}% return for significantly better \
                 risk-adjusted performance (Sharpe +{sharpe_diff:.2})"
            ),
            TradeOff::LowerRisk {
                vol_diff,
                dd_diff,
                return_diff,
            } => format!(
                "{winner_name} offers {vol_diff:.1}% lower volatility and {dd_diff:.1}% better \
                 drawdown control, worth the {return_diff:.1}% return trade-off"
            ),
            TradeOff::Dominant { return_diff } => format!(
                "{winner_name} dominates with both higher returns (+{return_diff:.1}%) and better \
                 risk metrics - no trade-off needed"
            ),
            TradeOff::ReturnJustifiesRisk {
                return_diff,
                sharpe_diff,
            } => format!(
                "{winner_name}'s {return_diff:.1}% higher return justifies marginally higher risk \
                 (Sharpe diff: {sharpe_diff:.2})"
            ),
            TradeOff::Efficiency => format!(
                "{winner_name} offers better overall risk-return efficiency based on \
                 multi-factor analysis"
            ),
            TradeOff::Balanced => "Both funds offer similar risk-return trade-offs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::detail::Direction;

    fn detail(metric: MetricKey, winner: Winner, difference: f64) -> MetricComparison {
        MetricComparison {
            metric,
            value_a: 0.0,
            value_b: 0.0,
            difference,
            winner,
            direction: Direction::HigherBetter,
        }
    }

    fn details(
        ret: (Winner, f64),
        sharpe: (Winner, f64),
        vol: (Winner, f64),
        dd: (Winner, f64),
    ) -> Vec<MetricComparison> {
        vec![
            detail(MetricKey::AnnualReturn, ret.0, ret.1),
            detail(MetricKey::SharpeRatio, sharpe.0, sharpe.1),
            detail(MetricKey::AnnualVolatility, vol.0, vol.1),
            detail(MetricKey::MaxDrawdown, dd.0, dd.1),
        ]
    }

    #[test]
    fn test_risk_adjusted_sacrifice() {
        let d = details(
            (Winner::B, -2.0),
            (Winner::A, 0.5),
            (Winner::A, 1.0),
            (Winner::A, 1.0),
        );
        let t = TradeOff::select(&d, Winner::A);
        assert_eq!(
            t,
            TradeOff::RiskAdjustedSacrifice {
                return_diff: 2.0,
                sharpe_diff: 0.5
            }
        );
        assert_eq!(
            t.narrative("Alpha"),
            "Alpha sacrifices 2.0% return for significantly better risk-adjusted performance (Sharpe +0.50)"
        );
    }

    #[test]
    fn test_lower_risk() {
        let d = details(
            (Winner::B, -4.0),
            (Winner::A, 0.2),
            (Winner::A, 6.0),
            (Winner::A, 2.0),
        );
        assert!(matches!(
            TradeOff::select(&d, Winner::A),
            TradeOff::LowerRisk { .. }
        ));
    }

    #[test]
    fn test_rule_one_falls_through_to_efficiency() {
        // Lost on return, won on Sharpe, but gaps too small for rule 1
        let d = details(
            (Winner::B, -4.0),
            (Winner::A, 0.1),
            (Winner::A, 1.0),
            (Winner::A, 1.0),
        );
        assert_eq!(TradeOff::select(&d, Winner::A), TradeOff::Efficiency);
    }

    #[test]
    fn test_dominant_for_fund_b() {
        let d = details(
            (Winner::B, -6.0),
            (Winner::A, 0.1),
            (Winner::B, -2.0),
            (Winner::A, 1.0),
        );
        let t = TradeOff::select(&d, Winner::B);
        assert_eq!(t, TradeOff::Dominant { return_diff: 6.0 });
        assert!(t.narrative("Beta").starts_with("Beta dominates with both higher returns (+6.0%)"));
    }

    #[test]
    fn test_return_justifies_risk() {
        let d = details(
            (Winner::A, 6.0),
            (Winner::B, -0.1),
            (Winner::B, -2.0),
            (Winner::B, -3.0),
        );
        assert_eq!(
            TradeOff::select(&d, Winner::A),
            TradeOff::ReturnJustifiesRisk {
                return_diff: 6.0,
                sharpe_diff: 0.1
            }
        );
    }

    #[test]
    fn test_tie_is_balanced() {
        assert_eq!(TradeOff::select(&[], Winner::Tie), TradeOff::Balanced);
    }
}
