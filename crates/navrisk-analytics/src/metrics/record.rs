//! The metrics record.

use std::fmt;

use serde::{Deserialize, Serialize};

use navrisk_core::Date;

/// Window a record was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AnalysisPeriod {
    /// Trailing calendar years measured back from the last NAV.
    Years(u32),
    /// Entire available history.
    FullHistory,
}

impl AnalysisPeriod {
    /// Maps an optional window to a period; `Some(0)` means full history.
    #[must_use]
    pub fn from_window(years: Option<u32>) -> Self {
        match years {
            Some(y) if y > 0 => AnalysisPeriod::Years(y),
            _ => AnalysisPeriod::FullHistory,
        }
    }

    /// Window length in years, `None` for full history.
    #[must_use]
    pub fn years(&self) -> Option<u32> {
        match self {
            AnalysisPeriod::Years(y) => Some(*y),
            AnalysisPeriod::FullHistory => None,
        }
    }
}

impl fmt::Display for AnalysisPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisPeriod::Years(y) => write!(f, "{y} Year(s)"),
            AnalysisPeriod::FullHistory => f.write_str("Full History"),
        }
    }
}

impl From<AnalysisPeriod> for String {
    fn from(period: AnalysisPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for AnalysisPeriod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "Full History" {
            return Ok(AnalysisPeriod::FullHistory);
        }
        s.strip_suffix(" Year(s)")
            .and_then(|n| n.parse().ok())
            .map(AnalysisPeriod::Years)
            .ok_or_else(|| format!("unrecognised analysis period '{s}'"))
    }
}

/// Complete risk and performance profile of one fund over one window.
///
/// Every field serializes under its display name so the JSON form is the
/// name → value table reports print. Percentages are ×100, ratios are
/// plain numbers; all values are already rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundMetrics {
    /// Last NAV over first NAV, minus one.
    #[serde(rename = "Total Return (%)")]
    pub total_return: f64,
    /// Compound annual growth of monthly returns.
    #[serde(rename = "Annual Return (%)")]
    pub annual_return: f64,
    /// Compounded monthly returns.
    #[serde(rename = "Cumulative Return (%)")]
    pub cumulative_return: f64,
    /// Annualised sample volatility of monthly returns.
    #[serde(rename = "Annual Volatility (%)")]
    pub annual_volatility: f64,
    /// Sample volatility of monthly returns.
    #[serde(rename = "Monthly Volatility (%)")]
    pub monthly_volatility: f64,
    /// Excess return per unit of volatility, annualised.
    #[serde(rename = "Sharpe Ratio")]
    pub sharpe_ratio: f64,
    /// Excess return per unit of downside risk, annualised.
    #[serde(rename = "Sortino Ratio")]
    pub sortino_ratio: f64,
    /// Annual return over absolute max drawdown.
    #[serde(rename = "Calmar Ratio")]
    pub calmar_ratio: f64,
    /// Worst peak-to-trough fall of the daily NAV curve (≤ 0).
    #[serde(rename = "Max Drawdown (%)")]
    pub max_drawdown: f64,
    /// 5th percentile daily return.
    #[serde(rename = "Value at Risk 95% (%)")]
    pub var_95: f64,
    /// Mean daily return in the worst 5% tail.
    #[serde(rename = "Conditional VaR 95% (%)")]
    pub cvar_95: f64,
    /// Annualised deviation of negative monthly returns.
    #[serde(rename = "Downside Deviation (%)")]
    pub downside_deviation: f64,
    /// Skewness of monthly returns.
    #[serde(rename = "Skewness")]
    pub skewness: f64,
    /// Excess kurtosis of monthly returns.
    #[serde(rename = "Kurtosis")]
    pub kurtosis: f64,
    /// R² of the cumulative log-return curve against time.
    #[serde(rename = "Stability")]
    pub stability: f64,
    /// Right tail over left tail of monthly returns.
    #[serde(rename = "Tail Ratio")]
    pub tail_ratio: f64,
    /// Window the record covers.
    #[serde(rename = "Analysis Period")]
    pub analysis_period: AnalysisPeriod,
    /// First NAV date in the window.
    #[serde(rename = "Start Date")]
    pub start_date: Date,
    /// Last NAV date in the window.
    #[serde(rename = "End Date")]
    pub end_date: Date,
    /// NAV observations in the window.
    #[serde(rename = "Total Days")]
    pub total_days: usize,
    /// Monthly returns in the window.
    #[serde(rename = "Total Months")]
    pub total_months: usize,
    /// Annual risk-free rate used.
    #[serde(rename = "Risk-Free Rate (%)")]
    pub risk_free_rate: f64,
}

impl FundMetrics {
    /// Value of a numeric metric.
    #[must_use]
    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::TotalReturn => self.total_return,
            MetricKey::AnnualReturn => self.annual_return,
            MetricKey::CumulativeReturn => self.cumulative_return,
            MetricKey::AnnualVolatility => self.annual_volatility,
            MetricKey::MonthlyVolatility => self.monthly_volatility,
            MetricKey::SharpeRatio => self.sharpe_ratio,
            MetricKey::SortinoRatio => self.sortino_ratio,
            MetricKey::CalmarRatio => self.calmar_ratio,
            MetricKey::MaxDrawdown => self.max_drawdown,
            MetricKey::ValueAtRisk95 => self.var_95,
            MetricKey::ConditionalVar95 => self.cvar_95,
            MetricKey::DownsideDeviation => self.downside_deviation,
            MetricKey::Skewness => self.skewness,
            MetricKey::Kurtosis => self.kurtosis,
            MetricKey::Stability => self.stability,
            MetricKey::TailRatio => self.tail_ratio,
        }
    }

    /// All numeric metrics with their display names, in report order.
    pub fn numeric(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        MetricKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    /// The subset used for screening.
    #[must_use]
    pub fn screening(&self) -> ScreeningMetrics {
        ScreeningMetrics {
            annual_return: self.annual_return,
            sharpe_ratio: self.sharpe_ratio,
            sortino_ratio: self.sortino_ratio,
            calmar_ratio: self.calmar_ratio,
            max_drawdown: self.max_drawdown,
            volatility: self.annual_volatility,
            total_return: self.total_return,
            months_analyzed: self.total_months,
        }
    }
}

/// Closed set of numeric metric names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    /// Total Return (%)
    TotalReturn,
    /// Annual Return (%)
    AnnualReturn,
    /// Cumulative Return (%)
    CumulativeReturn,
    /// Annual Volatility (%)
    AnnualVolatility,
    /// Monthly Volatility (%)
    MonthlyVolatility,
    /// Sharpe Ratio
    SharpeRatio,
    /// Sortino Ratio
    SortinoRatio,
    /// Calmar Ratio
    CalmarRatio,
    /// Max Drawdown (%)
    MaxDrawdown,
    /// Value at Risk 95% (%)
    ValueAtRisk95,
    /// Conditional VaR 95% (%)
    ConditionalVar95,
    /// Downside Deviation (%)
    DownsideDeviation,
    /// Skewness
    Skewness,
    /// Kurtosis
    Kurtosis,
    /// Stability
    Stability,
    /// Tail Ratio
    TailRatio,
}

impl MetricKey {
    /// Every numeric metric in report order.
    pub const ALL: [MetricKey; 16] = [
        MetricKey::TotalReturn,
        MetricKey::AnnualReturn,
        MetricKey::CumulativeReturn,
        MetricKey::AnnualVolatility,
        MetricKey::MonthlyVolatility,
        MetricKey::SharpeRatio,
        MetricKey::SortinoRatio,
        MetricKey::CalmarRatio,
        MetricKey::MaxDrawdown,
        MetricKey::ValueAtRisk95,
        MetricKey::ConditionalVar95,
        MetricKey::DownsideDeviation,
        MetricKey::Skewness,
        MetricKey::Kurtosis,
        MetricKey::Stability,
        MetricKey::TailRatio,
    ];

    /// Display name, as used in reports and serialized records.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::TotalReturn => "Total Return (%)",
            MetricKey::AnnualReturn => "Annual Return (%)",
            MetricKey::CumulativeReturn => "Cumulative Return (%)",
            MetricKey::AnnualVolatility => "Annual Volatility (%)",
            MetricKey::MonthlyVolatility => "Monthly Volatility (%)",
            MetricKey::SharpeRatio => "Sharpe Ratio",
            MetricKey::SortinoRatio => "Sortino Ratio",
            MetricKey::CalmarRatio => "Calmar Ratio",
            MetricKey::MaxDrawdown => "Max Drawdown (%)",
            MetricKey::ValueAtRisk95 => "Value at Risk 95% (%)",
            MetricKey::ConditionalVar95 => "Conditional VaR 95% (%)",
            MetricKey::DownsideDeviation => "Downside Deviation (%)",
            MetricKey::Skewness => "Skewness",
            MetricKey::Kurtosis => "Kurtosis",
            MetricKey::Stability => "Stability",
            MetricKey::TailRatio => "Tail Ratio",
        }
    }

    /// True for metrics stored as percentages.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        self.label().ends_with("(%)")
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics the screener ranks on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningMetrics {
    /// Annual Return (%)
    pub annual_return: f64,
    /// Sharpe Ratio
    pub sharpe_ratio: f64,
    /// Sortino Ratio
    pub sortino_ratio: f64,
    /// Calmar Ratio
    pub calmar_ratio: f64,
    /// Max Drawdown (%), ≤ 0
    pub max_drawdown: f64,
    /// Annual Volatility (%)
    pub volatility: f64,
    /// Total Return (%)
    pub total_return: f64,
    /// Monthly returns in the window
    pub months_analyzed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_period_labels() {
        assert_eq!(AnalysisPeriod::Years(3).to_string(), "3 Year(s)");
        assert_eq!(AnalysisPeriod::FullHistory.to_string(), "Full History");
        assert_eq!(AnalysisPeriod::from_window(Some(0)), AnalysisPeriod::FullHistory);
        assert_eq!(
            AnalysisPeriod::try_from("5 Year(s)".to_string()),
            Ok(AnalysisPeriod::Years(5))
        );
        assert!(AnalysisPeriod::try_from("five".to_string()).is_err());
    }

    #[test]
    fn test_metric_labels_are_unique() {
        let mut labels: Vec<_> = MetricKey::ALL.iter().map(MetricKey::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MetricKey::ALL.len());
        assert!(MetricKey::MaxDrawdown.is_percentage());
        assert!(!MetricKey::SharpeRatio.is_percentage());
    }
}
