//! Category screener.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use navrisk_core::{SchemeCode, SchemeInfo};
use navrisk_traits::{NavSource, SchemeDirectory};

use super::parallel::maybe_parallel_map;
use crate::config::{EngineConfig, PlanType};
use crate::error::AnalyticsResult;
use crate::metrics::{round2, FundMetrics, MetricsCalculator, ScreeningMetrics};
use crate::scoring::{efficiency_score, EfficiencyInputs};

/// A fund that passed screening, with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCandidate {
    /// Scheme identifier.
    pub scheme_code: SchemeCode,
    /// Display name.
    pub scheme_name: String,
    /// Screening metrics over the window.
    #[serde(flatten)]
    pub metrics: ScreeningMetrics,
    /// Efficiency score, rounded to 2dp.
    pub efficiency_score: f64,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The source could not supply a NAV history.
    Fetch {
        /// Source error text.
        message: String,
    },
    /// Metrics could not be computed over the window.
    Metrics {
        /// Analytics error text.
        message: String,
    },
    /// Too little monthly history for the window.
    TooFewMonths {
        /// Months required.
        required: usize,
        /// Months available.
        actual: usize,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Fetch { message } => write!(f, "fetch failed: {message}"),
            SkipReason::Metrics { message } => write!(f, "metrics failed: {message}"),
            SkipReason::TooFewMonths { required, actual } => {
                write!(f, "only {actual} months of data (need {required})")
            }
        }
    }
}

/// A candidate the screener dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedCandidate {
    /// Scheme identifier.
    pub scheme_code: SchemeCode,
    /// Display name.
    pub scheme_name: String,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Ranked funds together with what was filtered and skipped on the way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Candidates received.
    pub considered: usize,
    /// Candidates removed by the plan-type filter.
    pub filtered_out: usize,
    /// Candidates that could be analysed.
    pub analysed: usize,
    /// Top funds, best first.
    pub ranked: Vec<ScreeningCandidate>,
    /// Dropped candidates, in input order.
    pub skipped: Vec<SkippedCandidate>,
}

/// Screens and ranks candidate funds by efficiency score.
///
/// Candidates are evaluated independently; one failing never aborts the
/// screen. With the `parallel` feature and [`EngineConfig::parallel`] set,
/// evaluation fans out on the rayon pool, and the ranking is unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let screener = FundScreener::new(source, EngineConfig::default());
/// let top = screener.screen(&candidates, 5, 10, PlanType::Growth);
/// ```
#[derive(Debug, Clone)]
pub struct FundScreener<S> {
    source: S,
    calculator: MetricsCalculator,
}

impl<S: NavSource> FundScreener<S> {
    /// Creates a screener over `source`.
    pub fn new(source: S, config: EngineConfig) -> Self {
        Self {
            source,
            calculator: MetricsCalculator::new(config),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.calculator.config()
    }

    /// The underlying NAV source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Keeps candidates whose names match `plan`'s keywords.
    pub fn filter_by_plan_type(&self, candidates: &[SchemeInfo], plan: PlanType) -> Vec<SchemeInfo> {
        let keywords = &self.config().plan_keywords;
        let filtered: Vec<SchemeInfo> = candidates
            .iter()
            .filter(|c| keywords.matches(plan, &c.scheme_name))
            .cloned()
            .collect();
        if plan != PlanType::Both {
            info!(
                before = candidates.len(),
                after = filtered.len(),
                plan = %plan,
                "filtered candidates by plan type"
            );
        }
        filtered
    }

    /// Returns the top `config.top_n` candidates, best first.
    pub fn screen(
        &self,
        candidates: &[SchemeInfo],
        window_years: u32,
        min_months_per_year: u32,
        plan: PlanType,
    ) -> Vec<ScreeningCandidate> {
        self.screen_with_report(candidates, window_years, min_months_per_year, plan)
            .ranked
    }

    /// Screens `candidates` and reports skipped ones alongside the ranking.
    pub fn screen_with_report(
        &self,
        candidates: &[SchemeInfo],
        window_years: u32,
        min_months_per_year: u32,
        plan: PlanType,
    ) -> ScreeningReport {
        let eligible = self.filter_by_plan_type(candidates, plan);

        let outcomes = maybe_parallel_map(&eligible, self.config(), |info| {
            self.evaluate(info, window_years, min_months_per_year)
        });

        let mut ranked = Vec::new();
        let mut skipped = Vec::new();
        for (info, outcome) in eligible.iter().zip(outcomes) {
            match outcome {
                Ok(candidate) => ranked.push(candidate),
                Err(reason) => {
                    warn!(scheme = %info.scheme_code, %reason, "skipping candidate");
                    skipped.push(SkippedCandidate {
                        scheme_code: info.scheme_code.clone(),
                        scheme_name: info.scheme_name.clone(),
                        reason,
                    });
                }
            }
        }

        let analysed = ranked.len();
        rank(&mut ranked);
        ranked.truncate(self.config().top_n);

        info!(
            considered = candidates.len(),
            analysed,
            skipped = skipped.len(),
            "screening complete"
        );

        ScreeningReport {
            considered: candidates.len(),
            filtered_out: candidates.len() - eligible.len(),
            analysed,
            ranked,
            skipped,
        }
    }

    /// Fetches and scores a single candidate.
    pub fn evaluate(
        &self,
        info: &SchemeInfo,
        window_years: u32,
        min_months_per_year: u32,
    ) -> Result<ScreeningCandidate, SkipReason> {
        let series = self
            .source
            .nav_history(&info.scheme_code)
            .map_err(|e| SkipReason::Fetch {
                message: e.to_string(),
            })?;

        let metrics: FundMetrics = self
            .calculator
            .compute(&series, Some(window_years))
            .map_err(|e| SkipReason::Metrics {
                message: e.to_string(),
            })?;

        let required = (window_years * min_months_per_year) as usize;
        if metrics.total_months < required {
            return Err(SkipReason::TooFewMonths {
                required,
                actual: metrics.total_months,
            });
        }

        Ok(ScreeningCandidate {
            scheme_code: info.scheme_code.clone(),
            scheme_name: info.scheme_name.clone(),
            metrics: metrics.screening(),
            efficiency_score: round2(efficiency_score(&EfficiencyInputs::from_metrics(&metrics))),
        })
    }
}

impl<S: NavSource + SchemeDirectory> FundScreener<S> {
    /// Looks up candidates by search term, then screens them.
    ///
    /// # Errors
    ///
    /// Propagates the directory's error if the search itself fails.
    pub fn screen_query(
        &self,
        term: &str,
        window_years: u32,
        min_months_per_year: u32,
        plan: PlanType,
    ) -> AnalyticsResult<ScreeningReport> {
        let candidates = self.source.search(term)?;
        info!(term, found = candidates.len(), "resolved screening candidates");
        Ok(self.screen_with_report(&candidates, window_years, min_months_per_year, plan))
    }
}

/// Stable descending sort by efficiency score.
fn rank(candidates: &mut [ScreeningCandidate]) {
    candidates.sort_by(|a, b| b.efficiency_score.total_cmp(&a.efficiency_score));
}
