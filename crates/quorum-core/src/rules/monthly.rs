//! Nth-weekday-of-month rules.

use chrono::Weekday;
use std::fmt;

use crate::error::{QuorumError, QuorumResult};
use crate::types::Date;

/// A rule selecting one date per month, such as "4th Monday" or "last Friday".
///
/// A positive `nth` counts occurrences forward from the start of the month; a
/// negative `nth` counts backward from the end (`-1` is the last occurrence).
/// The magnitude is capped at 4, so the selected day always exists: forward
/// evaluation never passes day 28 and backward evaluation never precedes
/// day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRule {
    nth: i32,
    weekday: Weekday,
}

impl MonthlyRule {
    /// Creates a rule for the `nth` occurrence of `weekday` in a month.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidOrdinal` unless `1 <= |nth| <= 4`.
    pub fn new(nth: i32, weekday: Weekday) -> QuorumResult<Self> {
        if nth == 0 || nth.abs() > 4 {
            return Err(QuorumError::invalid_ordinal(nth));
        }
        Ok(Self { nth, weekday })
    }

    /// Returns the ordinal, signed by direction.
    #[must_use]
    pub fn nth(&self) -> i32 {
        self.nth
    }

    /// Returns the target weekday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the date this rule selects within the given month.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidDate` when `month` is outside 1-12 or
    /// `year` is outside the range of the underlying calendar.
    pub fn date_in(&self, year: i32, month: u32) -> QuorumResult<Date> {
        let first = Date::from_ymd(year, month, 1)?;
        let target = i64::from(self.weekday.num_days_from_monday());

        let day = if self.nth > 0 {
            let start = i64::from(first.weekday().num_days_from_monday());
            1 + (target - start).rem_euclid(7) + 7 * (i64::from(self.nth) - 1)
        } else {
            let last = first.end_of_month();
            let back = (i64::from(last.weekday().num_days_from_monday()) - target).rem_euclid(7);
            i64::from(last.day()) - back - 7 * (i64::from(-self.nth) - 1)
        };

        Date::from_ymd(year, month, day as u32)
    }
}

impl fmt::Display for MonthlyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordinal = match self.nth {
            1 => "1st",
            2 => "2nd",
            3 => "3rd",
            4 => "4th",
            -1 => "last",
            -2 => "2nd-to-last",
            -3 => "3rd-to-last",
            _ => "4th-to-last",
        };
        write!(f, "{ordinal} {}", long_weekday(self.weekday))
    }
}

fn long_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_out_of_range_ordinals() {
        assert!(MonthlyRule::new(0, Weekday::Mon).is_err());
        assert!(MonthlyRule::new(5, Weekday::Mon).is_err());
        assert!(MonthlyRule::new(-5, Weekday::Mon).is_err());
        assert!(MonthlyRule::new(4, Weekday::Mon).is_ok());
        assert!(MonthlyRule::new(-4, Weekday::Mon).is_ok());
    }

    #[test]
    fn test_rejects_invalid_month() {
        let rule = MonthlyRule::new(1, Weekday::Mon).unwrap();
        assert!(rule.date_in(2015, 0).is_err());
        assert!(rule.date_in(2015, 13).is_err());
    }

    #[test]
    fn test_fourth_monday_of_june_2015() {
        let rule = MonthlyRule::new(4, Weekday::Mon).unwrap();
        let date = rule.date_in(2015, 6).unwrap();
        assert_eq!(date, Date::from_ymd(2015, 6, 22).unwrap());
    }

    #[test]
    fn test_last_friday_of_december_2014() {
        let rule = MonthlyRule::new(-1, Weekday::Fri).unwrap();
        let date = rule.date_in(2014, 12).unwrap();
        assert_eq!(date, Date::from_ymd(2014, 12, 26).unwrap());
    }

    #[test]
    fn test_second_to_last_friday() {
        let rule = MonthlyRule::new(-2, Weekday::Fri).unwrap();
        let date = rule.date_in(2014, 12).unwrap();
        assert_eq!(date, Date::from_ymd(2014, 12, 19).unwrap());
    }

    #[test]
    fn test_first_occurrence_on_day_one() {
        // June 2015 starts on a Monday
        let rule = MonthlyRule::new(1, Weekday::Mon).unwrap();
        let date = rule.date_in(2015, 6).unwrap();
        assert_eq!(date, Date::from_ymd(2015, 6, 1).unwrap());
    }

    #[test]
    fn test_second_wednesday_leap_february() {
        let rule = MonthlyRule::new(2, Weekday::Wed).unwrap();
        let date = rule.date_in(2024, 2).unwrap();
        assert_eq!(date, Date::from_ymd(2024, 2, 14).unwrap());
    }

    #[test]
    fn test_forward_and_backward_can_coincide() {
        // February 2015 has exactly four Sundays, so the 4th from the start
        // is also the last from the end.
        let forward = MonthlyRule::new(4, Weekday::Sun).unwrap();
        let backward = MonthlyRule::new(-1, Weekday::Sun).unwrap();
        assert_eq!(
            forward.date_in(2015, 2).unwrap(),
            backward.date_in(2015, 2).unwrap()
        );
    }

    #[test]
    fn test_incrementing_nth_advances_seven_days() {
        for nth in 1..4 {
            let a = MonthlyRule::new(nth, Weekday::Thu).unwrap();
            let b = MonthlyRule::new(nth + 1, Weekday::Thu).unwrap();
            let first = a.date_in(2015, 10).unwrap();
            let second = b.date_in(2015, 10).unwrap();
            assert_eq!(first.add_days(7), second);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MonthlyRule::new(4, Weekday::Mon).unwrap().to_string(),
            "4th Monday"
        );
        assert_eq!(
            MonthlyRule::new(-1, Weekday::Fri).unwrap().to_string(),
            "last Friday"
        );
    }

    fn any_weekday() -> impl Strategy<Value = Weekday> {
        prop::sample::select(vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ])
    }

    proptest! {
        #[test]
        fn prop_result_matches_rule_and_month(
            nth in prop_oneof![1..=4i32, -4..=-1i32],
            weekday in any_weekday(),
            year in 1900..=2200i32,
            month in 1..=12u32,
        ) {
            let rule = MonthlyRule::new(nth, weekday).unwrap();
            let date = rule.date_in(year, month).unwrap();
            prop_assert_eq!(date.weekday(), weekday);
            prop_assert_eq!(date.year(), year);
            prop_assert_eq!(date.month(), month);
        }
    }
}
