//! Per-metric head-to-head results.

use serde::{Deserialize, Serialize};

use crate::metrics::{round2, FundMetrics, MetricKey};

/// Which side of a comparison came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// First fund.
    A,
    /// Second fund.
    B,
    /// Neither.
    #[serde(rename = "tie")]
    Tie,
}

impl Winner {
    /// The other side; a tie stays a tie.
    #[must_use]
    pub fn opponent(self) -> Winner {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            Winner::Tie => Winner::Tie,
        }
    }

    /// True for [`Winner::Tie`].
    #[must_use]
    pub fn is_tie(self) -> bool {
        self == Winner::Tie
    }

    /// Picks the value belonging to this side; ties pick `a`.
    pub fn pick<T>(self, a: T, b: T) -> T {
        match self {
            Winner::B => b,
            Winner::A | Winner::Tie => a,
        }
    }
}

/// Preferred direction of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger values win.
    HigherBetter,
    /// Smaller magnitudes win. Loss metrics stored as negative percentages
    /// (drawdown, VaR) compare by absolute value.
    LowerBetter,
}

/// Metrics the comparator scores, with their preferred direction.
pub const COMPARED_METRICS: [(MetricKey, Direction); 8] = [
    (MetricKey::AnnualReturn, Direction::HigherBetter),
    (MetricKey::SharpeRatio, Direction::HigherBetter),
    (MetricKey::SortinoRatio, Direction::HigherBetter),
    (MetricKey::CalmarRatio, Direction::HigherBetter),
    (MetricKey::MaxDrawdown, Direction::LowerBetter),
    (MetricKey::AnnualVolatility, Direction::LowerBetter),
    (MetricKey::ValueAtRisk95, Direction::LowerBetter),
    (MetricKey::DownsideDeviation, Direction::LowerBetter),
];

/// Outcome of one metric compared across two funds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Metric compared.
    pub metric: MetricKey,
    /// Fund A's value.
    pub value_a: f64,
    /// Fund B's value.
    pub value_b: f64,
    /// Signed difference, positive in fund A's favour, rounded to 2dp.
    pub difference: f64,
    /// Which fund is better on this metric.
    pub winner: Winner,
    /// Preferred direction.
    pub direction: Direction,
}

impl MetricComparison {
    /// Compares two raw values of `metric`.
    #[must_use]
    pub fn new(metric: MetricKey, direction: Direction, value_a: f64, value_b: f64) -> Self {
        let (a, b) = match direction {
            Direction::HigherBetter => (value_a, value_b),
            // Negate magnitudes so "higher wins" applies uniformly.
            Direction::LowerBetter => (-value_a.abs(), -value_b.abs()),
        };
        let winner = if a > b {
            Winner::A
        } else if b > a {
            Winner::B
        } else {
            Winner::Tie
        };
        Self {
            metric,
            value_a,
            value_b,
            difference: round2(a - b),
            winner,
            direction,
        }
    }

    /// Absolute size of the difference.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.difference.abs()
    }
}

/// Compares every metric in [`COMPARED_METRICS`].
#[must_use]
pub fn compare_metrics(a: &FundMetrics, b: &FundMetrics) -> Vec<MetricComparison> {
    COMPARED_METRICS
        .iter()
        .map(|&(key, direction)| MetricComparison::new(key, direction, a.get(key), b.get(key)))
        .collect()
}
