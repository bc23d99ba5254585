//! Calendar date type for NAV observations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date on which a NAV was published.
///
/// Newtype wrapper around `chrono::NaiveDate` with the handful of
/// calendar operations the analytics pipeline needs (year offsets and
/// month bucketing).
///
/// # Example
///
/// ```rust
/// use navrisk_core::types::Date;
///
/// let date = Date::from_ymd(2024, 2, 29).unwrap();
/// let earlier = date.sub_years(1).unwrap();
/// assert_eq!(earlier.to_string(), "2023-02-28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses a day-first date (`DD-MM-YYYY`), the format used by the public
    /// mutual fund NAV feeds.
    pub fn parse_dmy(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%d-%m-%Y")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses either `YYYY-MM-DD` or `DD-MM-YYYY`.
    pub fn parse_any(s: &str) -> CoreResult<Self> {
        Self::parse(s).or_else(|_| Self::parse_dmy(s))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Months since year 0, used to bucket observations by calendar month.
    #[must_use]
    pub fn month_index(&self) -> i32 {
        self.year() * 12 + self.month() as i32 - 1
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months, clamping the day to the end of the target month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.month_index() + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));
        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Subtracts whole calendar years. Feb 29 maps to Feb 28 in a non-leap year.
    pub fn sub_years(&self, years: u32) -> CoreResult<Self> {
        let new_year = self.year() - years as i32;
        let new_day = self.day().min(days_in_month(new_year, self.month()));
        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
