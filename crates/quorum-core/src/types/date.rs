//! Date type for meeting and holiday calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{QuorumError, QuorumResult};

/// A calendar date on the Gregorian proleptic calendar.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// scheduling-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use quorum_core::types::Date;
///
/// let date = Date::from_ymd(2015, 6, 22).unwrap();
/// assert_eq!(date.weekday(), chrono::Weekday::Mon);
/// assert!(!date.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> QuorumResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| QuorumError::invalid_date(format!("{year}-{month:02}-{day:02}")))
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

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => unreachable!(),
        }
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
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

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2015, 6, 22).unwrap();
        assert_eq!(date.year(), 2015);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 22);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2015, 2, 30).is_err());
        assert!(Date::from_ymd(2015, 13, 1).is_err());
        assert!(Date::from_ymd(2015, 0, 1).is_err());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_end_of_month() {
        let feb = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(feb.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());

        let jun = Date::from_ymd(2015, 6, 1).unwrap();
        assert_eq!(jun.end_of_month(), Date::from_ymd(2015, 6, 30).unwrap());
    }

    #[test]
    fn test_weekend_detection() {
        // Monday
        let monday = Date::from_ymd(2015, 6, 22).unwrap();
        assert!(!monday.is_weekend());
        assert_eq!(monday.weekday(), Weekday::Mon);

        // Saturday
        let saturday = Date::from_ymd(2015, 4, 25).unwrap();
        assert!(saturday.is_weekend());
        assert_eq!(saturday.weekday(), Weekday::Sat);

        // Sunday
        let sunday = Date::from_ymd(2015, 4, 26).unwrap();
        assert!(sunday.is_weekend());
        assert_eq!(sunday.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2015, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);
    }

    #[test]
    fn test_add_days_across_month() {
        // Adding a week from late December lands in January
        let d = Date::from_ymd(2015, 12, 28).unwrap();
        let next = d.add_days(7);
        assert_eq!(next, Date::from_ymd(2016, 1, 4).unwrap());
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2015, 6, 22).unwrap();
        assert_eq!(format!("{}", date), "2015-06-22");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2015, 6, 22).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2015-06-22\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
