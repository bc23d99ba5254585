//! NAV observations and validated NAV series.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A single published NAV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Publication date.
    pub date: Date,
    /// Net asset value per unit.
    pub nav: Decimal,
}

impl NavPoint {
    /// Creates a NAV point.
    #[must_use]
    pub fn new(date: Date, nav: Decimal) -> Self {
        Self { date, nav }
    }

    /// Creates a NAV point from a floating point value.
    pub fn from_f64(date: Date, nav: f64) -> CoreResult<Self> {
        let nav = Decimal::from_f64_retain(nav).ok_or_else(|| CoreError::invalid_nav(nav.to_string()))?;
        Ok(Self { date, nav })
    }

    /// Parses a NAV from its textual representation (e.g. `"123.4567"`).
    pub fn parse(date: Date, raw: &str) -> CoreResult<Self> {
        let nav = Decimal::from_str(raw.trim()).map_err(|_| CoreError::invalid_nav(raw))?;
        Ok(Self { date, nav })
    }

    /// NAV as `f64` for numeric work.
    #[must_use]
    pub fn nav_f64(&self) -> f64 {
        self.nav.to_f64().unwrap_or(f64::NAN)
    }
}

/// An ordered NAV history.
///
/// Invariants enforced at construction:
/// - dates strictly increasing (no duplicates)
/// - every NAV strictly positive
///
/// The series is immutable; windowing returns a new series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavPoint>", into = "Vec<NavPoint>")]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Creates a series from points already sorted by date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSeries` if dates are not strictly
    /// increasing or a NAV is not positive.
    pub fn new(points: Vec<NavPoint>) -> CoreResult<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CoreError::invalid_series(format!(
                    "dates not strictly increasing at {} -> {}",
                    pair[0].date, pair[1].date
                )));
            }
        }
        if let Some(bad) = points.iter().find(|p| p.nav <= Decimal::ZERO) {
            return Err(CoreError::invalid_series(format!(
                "non-positive NAV {} on {}",
                bad.nav, bad.date
            )));
        }
        Ok(Self { points })
    }

    /// Sorts points by date, then validates.
    pub fn from_unsorted(mut points: Vec<NavPoint>) -> CoreResult<Self> {
        points.sort_by_key(|p| p.date);
        Self::new(points)
    }

    /// Builds a series from `(date, nav)` pairs.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        let points = pairs
            .into_iter()
            .map(|(date, nav)| NavPoint::from_f64(date, nav))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(points)
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in date order.
    #[must_use]
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    /// Iterator over observations.
    pub fn iter(&self) -> std::slice::Iter<'_, NavPoint> {
        self.points.iter()
    }

    /// First observation.
    #[must_use]
    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// Last observation.
    #[must_use]
    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// NAV values as `f64`, in date order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(NavPoint::nav_f64).collect()
    }

    /// Observations on or after `cutoff`.
    #[must_use]
    pub fn since(&self, cutoff: Date) -> NavSeries {
        let start = self.points.partition_point(|p| p.date < cutoff);
        NavSeries {
            points: self.points[start..].to_vec(),
        }
    }

    /// Observations within the trailing `years` calendar years, measured back
    /// from the last observation.
    pub fn trailing_years(&self, years: u32) -> CoreResult<NavSeries> {
        match self.last() {
            Some(last) => Ok(self.since(last.date.sub_years(years)?)),
            None => Ok(self.clone()),
        }
    }
}

impl TryFrom<Vec<NavPoint>> for NavSeries {
    type Error = CoreError;

    fn try_from(points: Vec<NavPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<NavSeries> for Vec<NavPoint> {
    fn from(series: NavSeries) -> Self {
        series.points
    }
}

impl<'a> IntoIterator for &'a NavSeries {
    type Item = &'a NavPoint;
    type IntoIter = std::slice::Iter<'a, NavPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_rejects_duplicates_and_unsorted() {
        let dup = vec![
            NavPoint::new(d(2024, 1, 1), dec!(10)),
            NavPoint::new(d(2024, 1, 1), dec!(11)),
        ];
        assert!(NavSeries::new(dup).is_err());

        let unsorted = vec![
            NavPoint::new(d(2024, 1, 2), dec!(10)),
            NavPoint::new(d(2024, 1, 1), dec!(11)),
        ];
        assert!(NavSeries::new(unsorted.clone()).is_err());
        let sorted = NavSeries::from_unsorted(unsorted).unwrap();
        assert_eq!(sorted.first().unwrap().date, d(2024, 1, 1));
    }

    #[test]
    fn test_rejects_non_positive_nav() {
        let points = vec![NavPoint::new(d(2024, 1, 1), dec!(0))];
        assert!(matches!(
            NavSeries::new(points),
            Err(CoreError::InvalidSeries { .. })
        ));
    }

    #[test]
    fn test_parse_nav() {
        let p = NavPoint::parse(d(2024, 1, 1), " 123.4567 ").unwrap();
        assert_eq!(p.nav, dec!(123.4567));
        assert!(NavPoint::parse(d(2024, 1, 1), "n/a").is_err());
    }

    #[test]
    fn test_trailing_years() {
        let series = NavSeries::from_pairs([
            (d(2020, 6, 30), 10.0),
            (d(2021, 6, 29), 11.0),
            (d(2021, 6, 30), 12.0),
            (d(2022, 6, 30), 13.0),
        ])
        .unwrap();
        let window = series.trailing_years(1).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.first().unwrap().date, d(2021, 6, 30));
    }

    #[test]
    fn test_serde_validates() {
        let bad = r#"[{"date":"2024-01-02","nav":10.0},{"date":"2024-01-01","nav":11.0}]"#;
        assert!(serde_json::from_str::<NavSeries>(bad).is_err());

        let good = r#"[{"date":"2024-01-01","nav":10.0},{"date":"2024-01-02","nav":11.0}]"#;
        let series: NavSeries = serde_json::from_str(good).unwrap();
        assert_eq!(series.len(), 2);
    }
}
