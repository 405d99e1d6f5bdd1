//! Yearly rules: a monthly rule pinned to a calendar month.

use chrono::Weekday;
use std::fmt;

use crate::error::{QuorumError, QuorumResult};
use crate::rules::MonthlyRule;
use crate::types::Date;

/// A rule selecting one date per year, such as "1st Monday of June".
///
/// Used for holidays that are defined by rule rather than by a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyRule {
    month: u32,
    rule: MonthlyRule,
}

impl YearlyRule {
    /// Creates a rule for the `nth` occurrence of `weekday` in `month`.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidOrdinal` for an out-of-range ordinal and
    /// `QuorumError::InvalidDate` for a month outside 1-12.
    pub fn new(nth: i32, weekday: Weekday, month: u32) -> QuorumResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(QuorumError::invalid_date(format!(
                "month out of range: {month}"
            )));
        }
        Ok(Self {
            month,
            rule: MonthlyRule::new(nth, weekday)?,
        })
    }

    /// Returns the month this rule is pinned to (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the date this rule selects in the given year.
    pub fn date_in(&self, year: i32) -> QuorumResult<Date> {
        self.rule.date_in(year, self.month)
    }
}

impl fmt::Display for YearlyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of month {}", self.rule, self.month)
    }
}
