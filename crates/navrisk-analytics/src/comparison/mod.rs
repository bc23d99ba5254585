//! Head-to-head fund comparison.
//!
//! [`FundComparator`] scores eight metrics side by side, computes each fund's
//! efficiency score and turns the gap into a [`Recommendation`].

mod comparator;
mod detail;
mod recommendation;
mod tradeoff;

pub use comparator::{ComparisonResult, ComparisonScores, FundComparator, METHODOLOGY, TIE_THRESHOLD};
pub use detail::{compare_metrics, Direction, MetricComparison, Winner, COMPARED_METRICS};
pub use recommendation::{Confidence, InvestmentHorizon, Recommendation, RiskProfile};
pub use tradeoff::TradeOff;
