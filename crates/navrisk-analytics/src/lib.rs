//! # NavRisk Analytics
//!
//! Risk analytics engine for mutual funds, driven by NAV history.
//!
//! - **Metrics**: returns, volatility, Sharpe / Sortino / Calmar, drawdown,
//!   VaR / CVaR, distribution shape and stability from a [`NavSeries`]
//! - **Scoring**: the risk-adjusted efficiency model
//! - **Comparison**: head-to-head analysis with a recommendation
//! - **Screening**: rank a category of funds by efficiency score
//!
//! [`NavSeries`]: navrisk_core::NavSeries
//!
//! ## Architecture
//!
//! The engine never fetches data itself. Screening takes any
//! [`NavSource`](navrisk_traits::NavSource); the calculator and comparator
//! are pure functions of their inputs. Runtime settings live in
//! [`EngineConfig`], passed to constructors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navrisk_analytics::prelude::*;
//!
//! let calculator = MetricsCalculator::new(EngineConfig::default());
//! let a = calculator.compute(&series_a, Some(3))?;
//! let b = calculator.compute(&series_b, Some(3))?;
//!
//! let result = FundComparator::new().compare(&a, &b, "Fund A", "Fund B");
//! println!("{}", result.recommendation.trade_off_analysis);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod comparison;
pub mod config;
pub mod error;
pub mod metrics;
pub mod scoring;
pub mod screening;

pub use config::{EngineConfig, FundCategory, PlanKeywords, PlanType};
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use navrisk_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{EngineConfig, FundCategory, PlanKeywords, PlanType};
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Metrics
    pub use crate::metrics::{
        AnalysisPeriod, FundMetrics, MetricKey, MetricsCalculator, ScreeningMetrics,
    };

    // Scoring
    pub use crate::scoring::{efficiency_score, EfficiencyInputs};

    // Comparison
    pub use crate::comparison::{
        ComparisonResult, ComparisonScores, Confidence, Direction, FundComparator,
        InvestmentHorizon, MetricComparison, Recommendation, RiskProfile, TradeOff, Winner,
    };

    // Screening
    pub use crate::screening::{
        FundScreener, ScreeningCandidate, ScreeningReport, SkipReason, SkippedCandidate,
    };
}
