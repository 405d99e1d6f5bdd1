//! New Zealand statutory holidays.
//!
//! ## Holidays
//!
//! - New Year's Day (January 1, Mondayized)
//! - Day after New Year's Day (January 2, Mondayized)
//! - Waitangi Day (February 6, Mondayized)
//! - Good Friday (from the table below)
//! - Easter Monday (from the table below)
//! - Anzac Day (April 25, Mondayized)
//! - Queen's Birthday (1st Monday in June)
//! - Labour Day (4th Monday in October)
//! - Christmas Day (December 25, Mondayized)
//! - Boxing Day (December 26, Mondayized)
//!
//! Easter-derived dates are kept as explicit per-year tables rather than
//! computed, so the span of those tables defines the supported year range.

use chrono::Weekday;
use std::sync::OnceLock;

use super::{HolidayCalendar, HolidayDefinition};
use crate::rules::YearlyRule;
use crate::types::Date;

/// First year covered by the Easter tables.
pub const MIN_YEAR: i32 = 2014;
/// Last year covered by the Easter tables.
pub const MAX_YEAR: i32 = 2030;

/// Static New Zealand calendar instance.
static NZ_CALENDAR: OnceLock<HolidayCalendar> = OnceLock::new();

/// Returns the shared New Zealand statutory holiday calendar.
pub fn calendar() -> &'static HolidayCalendar {
    NZ_CALENDAR.get_or_init(build_nz_calendar)
}

/// Good Friday, by year.
const GOOD_FRIDAY: [(i32, u32, u32); 17] = [
    (2014, 4, 18),
    (2015, 4, 3),
    (2016, 3, 25),
    (2017, 4, 14),
    (2018, 3, 30),
    (2019, 4, 19),
    (2020, 4, 10),
    (2021, 4, 2),
    (2022, 4, 15),
    (2023, 4, 7),
    (2024, 3, 29),
    (2025, 4, 18),
    (2026, 4, 3),
    (2027, 3, 26),
    (2028, 4, 14),
    (2029, 3, 30),
    (2030, 4, 19),
];

/// Easter Monday, by year.
const EASTER_MONDAY: [(i32, u32, u32); 17] = [
    (2014, 4, 21),
    (2015, 4, 6),
    (2016, 3, 28),
    (2017, 4, 17),
    (2018, 4, 2),
    (2019, 4, 22),
    (2020, 4, 13),
    (2021, 4, 5),
    (2022, 4, 18),
    (2023, 4, 10),
    (2024, 4, 1),
    (2025, 4, 21),
    (2026, 4, 6),
    (2027, 3, 29),
    (2028, 4, 17),
    (2029, 4, 2),
    (2030, 4, 22),
];

/// Build the New Zealand holiday calendar.
fn build_nz_calendar() -> HolidayCalendar {
    let definitions = vec![
        anniversary("New Year's Day", 1, 1),
        anniversary("Day after New Year's Day", 1, 2),
        anniversary("Waitangi Day", 2, 6),
        easter_table("Good Friday", &GOOD_FRIDAY),
        easter_table("Easter Monday", &EASTER_MONDAY),
        anniversary("Anzac Day", 4, 25),
        rule_holiday("Queen's Birthday", 1, Weekday::Mon, 6),
        rule_holiday("Labour Day", 4, Weekday::Mon, 10),
        anniversary("Christmas Day", 12, 25),
        anniversary("Boxing Day", 12, 26),
    ];
    HolidayCalendar::new(definitions, MIN_YEAR..=MAX_YEAR)
}

/// A Mondayized same-date-every-year holiday across the supported range.
fn anniversary(description: &str, month: u32, day: u32) -> HolidayDefinition {
    HolidayDefinition::anniversary(description, month, day, true, MIN_YEAR..=MAX_YEAR)
        .expect("statutory dates are valid in every year")
}

/// An Easter-derived holiday from its per-year table.
///
/// Never Mondayized: Good Friday and Easter Monday cannot fall on a weekend.
fn easter_table(description: &str, table: &[(i32, u32, u32)]) -> HolidayDefinition {
    HolidayDefinition::fixed(
        description,
        false,
        table.iter().map(|&(year, month, day)| {
            (
                year,
                Date::from_ymd(year, month, day).expect("Easter tables hold valid dates"),
            )
        }),
    )
}

/// A rule-derived holiday; these always fall on a weekday.
fn rule_holiday(description: &str, nth: i32, weekday: Weekday, month: u32) -> HolidayDefinition {
    HolidayDefinition::rule(
        description,
        false,
        YearlyRule::new(nth, weekday, month).expect("statutory rules are valid"),
    )
}
