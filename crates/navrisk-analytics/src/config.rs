//! Engine configuration.
//!
//! Everything the calculator and screener need that is not part of a single
//! call: the risk-free rate, window defaults, screening thresholds and the
//! keyword tables used to pick candidates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Configuration for the analytics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Annual risk-free rate as a fraction (0.07 = 7%).
    pub risk_free_rate: f64,

    /// Window for single-fund analysis in years. `None` uses the full history.
    pub analysis_years: Option<u32>,

    /// Window used when screening a category.
    pub screening_years: u32,

    /// Number of ranked funds a screen returns.
    pub top_n: usize,

    /// Minimum months of returns required per year of the screening window.
    pub min_months_per_year: u32,

    /// Fan out candidate fetches on the rayon pool (requires the `parallel`
    /// feature). Ranking is identical either way.
    pub parallel: bool,

    /// Fund categories offered for screening.
    pub categories: Vec<FundCategory>,

    /// Keywords identifying plan types in scheme names.
    pub plan_keywords: PlanKeywords,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.07,
            analysis_years: None,
            screening_years: 5,
            top_n: 5,
            min_months_per_year: 10,
            parallel: false,
            categories: default_categories(),
            plan_keywords: PlanKeywords::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annual risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the single-fund analysis window.
    #[must_use]
    pub fn with_analysis_years(mut self, years: Option<u32>) -> Self {
        self.analysis_years = years;
        self
    }

    /// Sets the screening window.
    #[must_use]
    pub fn with_screening_years(mut self, years: u32) -> Self {
        self.screening_years = years;
        self
    }

    /// Sets how many ranked funds a screen returns.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets the months-per-year data requirement.
    #[must_use]
    pub fn with_min_months_per_year(mut self, months: u32) -> Self {
        self.min_months_per_year = months;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Returns true if parallel evaluation should be used for `count` items.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count > 1
    }

    /// Looks up a category by its menu id.
    #[must_use]
    pub fn category(&self, id: u32) -> Option<&FundCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Checks that all values are in range.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.risk_free_rate.is_finite() || !(-0.5..=1.0).contains(&self.risk_free_rate) {
            return Err(AnalyticsError::invalid_config(format!(
                "risk_free_rate must be a fraction between -0.5 and 1.0, got {}",
                self.risk_free_rate
            )));
        }
        if self.analysis_years == Some(0) {
            return Err(AnalyticsError::invalid_config(
                "analysis_years must be at least 1 (omit it for full history)",
            ));
        }
        if self.screening_years == 0 {
            return Err(AnalyticsError::invalid_config("screening_years must be at least 1"));
        }
        if self.top_n == 0 {
            return Err(AnalyticsError::invalid_config("top_n must be at least 1"));
        }
        if self.min_months_per_year > 12 {
            return Err(AnalyticsError::invalid_config(format!(
                "min_months_per_year cannot exceed 12, got {}",
                self.min_months_per_year
            )));
        }
        Ok(())
    }
}

/// A screenable fund category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundCategory {
    /// Menu id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Directory search term. `None` means the user supplies one.
    pub search: Option<String>,
}

impl FundCategory {
    fn new(id: u32, name: &str, search: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            search: search.map(str::to_string),
        }
    }
}

/// Built-in category table.
#[must_use]
pub fn default_categories() -> Vec<FundCategory> {
    [
        (1, "Large Cap / Bluechip", Some("Large Cap")),
        (2, "Mid Cap", Some("Mid Cap")),
        (3, "Small Cap", Some("Small Cap")),
        (4, "Multi Cap", Some("Multi Cap")),
        (5, "Flexi Cap", Some("Flexi Cap")),
        (6, "Large & Mid Cap", Some("Large and Mid Cap")),
        (7, "Focused Fund", Some("Focused")),
        (8, "Sectoral - Banking", Some("Banking")),
        (9, "Sectoral - Technology", Some("Technology")),
        (10, "Sectoral - Pharma", Some("Pharma")),
        (11, "Sectoral - Infrastructure", Some("Infrastructure")),
        (12, "Sectoral - FMCG", Some("FMCG")),
        (13, "Sectoral - Energy", Some("Energy")),
        (14, "Thematic - ESG", Some("ESG")),
        (15, "Thematic - Dividend Yield", Some("Dividend")),
        (16, "ELSS / Tax Saver", Some("ELSS")),
        (17, "Balanced / Hybrid Equity", Some("Balanced")),
        (18, "Aggressive Hybrid", Some("Aggressive Hybrid")),
        (19, "Conservative Hybrid", Some("Conservative Hybrid")),
        (20, "Equity Savings", Some("Equity Savings")),
        (21, "Multi Asset Allocation", Some("Multi Asset")),
        (22, "Arbitrage Fund", Some("Arbitrage")),
        (23, "Index Fund - Nifty 50", Some("Nifty 50")),
        (24, "Index Fund - Sensex", Some("Sensex")),
        (25, "Index Fund - Nifty Next 50", Some("Nifty Next 50")),
        (26, "Value Fund", Some("Value")),
        (27, "Contra Fund", Some("Contra")),
        (28, "International / Global", Some("International")),
        (29, "Custom Search", None),
    ]
    .into_iter()
    .map(|(id, name, search)| FundCategory::new(id, name, search))
    .collect()
}

/// Plan variant of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Growth plans only.
    Growth,
    /// Income distribution (IDCW / dividend) plans only.
    Idcw,
    /// No filtering.
    #[default]
    Both,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanType::Growth => "growth",
            PlanType::Idcw => "idcw",
            PlanType::Both => "both",
        };
        f.write_str(s)
    }
}

impl FromStr for PlanType {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "growth" => Ok(PlanType::Growth),
            "idcw" | "dividend" => Ok(PlanType::Idcw),
            "both" | "all" => Ok(PlanType::Both),
            other => Err(AnalyticsError::invalid_config(format!(
                "unknown plan type '{other}' (expected growth, idcw or both)"
            ))),
        }
    }
}

/// Lower-case keywords that mark a scheme name as a given plan type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanKeywords {
    /// Keywords for growth plans.
    pub growth: Vec<String>,
    /// Keywords for IDCW plans.
    pub idcw: Vec<String>,
}

impl Default for PlanKeywords {
    fn default() -> Self {
        Self {
            growth: vec!["growth".to_string()],
            idcw: vec!["idcw".to_string(), "dividend".to_string()],
        }
    }
}

impl PlanKeywords {
    /// Keywords for `plan`; empty for [`PlanType::Both`].
    #[must_use]
    pub fn for_plan(&self, plan: PlanType) -> &[String] {
        match plan {
            PlanType::Growth => &self.growth,
            PlanType::Idcw => &self.idcw,
            PlanType::Both => &[],
        }
    }

    /// Case-insensitive substring match of `plan`'s keywords against `name`.
    /// Always true for [`PlanType::Both`].
    #[must_use]
    pub fn matches(&self, plan: PlanType, name: &str) -> bool {
        if plan == PlanType::Both {
            return true;
        }
        let name = name.to_lowercase();
        self.for_plan(plan)
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    }
}
