//! Recommendation labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tradeoff::TradeOff;
use crate::metrics::MetricKey;

/// How clear-cut a recommendation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    /// Score gap of 8 points or less, or a tie.
    Low,
    /// Score gap above 8.
    Medium,
    /// Score gap above 15.
    High,
    /// Score gap above 25.
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Confidence {
    /// Confidence for a relative score gap (percentage points).
    #[must_use]
    pub fn from_score_difference(difference: f64) -> Self {
        if difference > 25.0 {
            Confidence::VeryHigh
        } else if difference > 15.0 {
            Confidence::High
        } else if difference > 8.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
            Confidence::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk tier of the recommended fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    /// Volatility < 12% and drawdown < 15%.
    #[serde(rename = "Low Risk (Conservative)")]
    Conservative,
    /// Volatility < 18% and drawdown < 25%.
    #[serde(rename = "Moderate Risk (Balanced)")]
    Balanced,
    /// Volatility < 25% and drawdown < 35%.
    #[serde(rename = "Moderate-High Risk (Growth)")]
    Growth,
    /// Anything riskier.
    #[serde(rename = "High Risk (Aggressive)")]
    Aggressive,
}

impl RiskProfile {
    /// Classifies annual volatility and absolute max drawdown (both %).
    #[must_use]
    pub fn classify(volatility: f64, abs_drawdown: f64) -> Self {
        if volatility < 12.0 && abs_drawdown < 15.0 {
            RiskProfile::Conservative
        } else if volatility < 18.0 && abs_drawdown < 25.0 {
            RiskProfile::Balanced
        } else if volatility < 25.0 && abs_drawdown < 35.0 {
            RiskProfile::Growth
        } else {
            RiskProfile::Aggressive
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Low Risk (Conservative)",
            RiskProfile::Balanced => "Moderate Risk (Balanced)",
            RiskProfile::Growth => "Moderate-High Risk (Growth)",
            RiskProfile::Aggressive => "High Risk (Aggressive)",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggested minimum holding period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentHorizon {
    /// Sharpe > 1.8 and drawdown < 20%.
    #[serde(rename = "3+ years (Excellent risk-adjusted profile)")]
    ThreeYears,
    /// Sharpe > 1.2 and drawdown < 30%.
    #[serde(rename = "5+ years (Good risk-adjusted profile)")]
    FiveYears,
    /// Sharpe > 0.8.
    #[serde(rename = "7+ years (Moderate risk-adjusted profile)")]
    SevenYears,
    /// Everything else.
    #[serde(rename = "10+ years (Requires long horizon for risk compensation)")]
    TenYears,
}

impl InvestmentHorizon {
    /// Classifies Sharpe ratio and absolute max drawdown (%).
    #[must_use]
    pub fn classify(sharpe: f64, abs_drawdown: f64) -> Self {
        if sharpe > 1.8 && abs_drawdown < 20.0 {
            InvestmentHorizon::ThreeYears
        } else if sharpe > 1.2 && abs_drawdown < 30.0 {
            InvestmentHorizon::FiveYears
        } else if sharpe > 0.8 {
            InvestmentHorizon::SevenYears
        } else {
            InvestmentHorizon::TenYears
        }
    }

    /// Minimum years.
    #[must_use]
    pub fn years(&self) -> u32 {
        match self {
            InvestmentHorizon::ThreeYears => 3,
            InvestmentHorizon::FiveYears => 5,
            InvestmentHorizon::SevenYears => 7,
            InvestmentHorizon::TenYears => 10,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentHorizon::ThreeYears => "3+ years (Excellent risk-adjusted profile)",
            InvestmentHorizon::FiveYears => "5+ years (Good risk-adjusted profile)",
            InvestmentHorizon::SevenYears => "7+ years (Moderate risk-adjusted profile)",
            InvestmentHorizon::TenYears => "10+ years (Requires long horizon for risk compensation)",
        }
    }
}

impl fmt::Display for InvestmentHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommendation attached to a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Name of the recommended fund, or a tie statement.
    pub recommended_fund: String,
    /// How clear-cut the result is.
    pub confidence: Confidence,
    /// Why the fund was recommended.
    pub reason: String,
    /// Which trade-off the recommendation represents.
    pub trade_off: TradeOff,
    /// Narrative for [`Recommendation::trade_off`].
    pub trade_off_analysis: String,
    /// Risk tier of the recommended fund (fund A on a tie).
    pub risk_profile: RiskProfile,
    /// Suggested holding period.
    pub suggested_investment_horizon: InvestmentHorizon,
    /// Up to three metrics the winner leads on, largest gap first.
    pub key_strengths: Vec<MetricKey>,
    /// Up to three metrics the winner trails on, largest gap first.
    pub key_weaknesses: Vec<MetricKey>,
    /// Gap between the two relative scores.
    pub overall_score_difference: f64,
    /// Scoring model name.
    pub methodology: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_thresholds_are_strict() {
        assert_eq!(Confidence::from_score_difference(25.0), Confidence::High);
        assert_eq!(Confidence::from_score_difference(25.01), Confidence::VeryHigh);
        assert_eq!(Confidence::from_score_difference(15.0), Confidence::Medium);
        assert_eq!(Confidence::from_score_difference(8.0), Confidence::Low);
        assert_eq!(Confidence::from_score_difference(8.5), Confidence::Medium);
    }

    #[test]
    fn test_risk_profile() {
        assert_eq!(RiskProfile::classify(10.0, 14.0), RiskProfile::Conservative);
        assert_eq!(RiskProfile::classify(10.0, 20.0), RiskProfile::Balanced);
        assert_eq!(RiskProfile::classify(20.0, 30.0), RiskProfile::Growth);
        assert_eq!(RiskProfile::classify(20.0, 40.0), RiskProfile::Aggressive);
    }

    #[test]
    fn test_horizon() {
        assert_eq!(InvestmentHorizon::classify(2.0, 15.0), InvestmentHorizon::ThreeYears);
        assert_eq!(InvestmentHorizon::classify(2.0, 25.0), InvestmentHorizon::FiveYears);
        assert_eq!(InvestmentHorizon::classify(1.0, 50.0), InvestmentHorizon::SevenYears);
        assert_eq!(InvestmentHorizon::classify(0.5, 5.0), InvestmentHorizon::TenYears);
        assert_eq!(InvestmentHorizon::TenYears.years(), 10);
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&Confidence::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        let json = serde_json::to_string(&RiskProfile::Growth).unwrap();
        assert_eq!(json, "\"Moderate-High Risk (Growth)\"");
    }
}
