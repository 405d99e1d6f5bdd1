//! CLI command implementations.

pub mod holidays;
pub mod plan;

// Re-export submodules for convenience
pub use holidays::HolidaysArgs;
pub use plan::PlanArgs;

use chrono::Weekday;

use crate::error::{CliError, CliResult};

/// Parses a weekday name or three-letter abbreviation.
pub fn parse_weekday(s: &str) -> CliResult<Weekday> {
    quorum_core::types::parse_weekday(s).map_err(|_| CliError::InvalidWeekday(s.to_string()))
}

/// Validates a rule ordinal.
pub fn validate_ordinal(nth: i32) -> CliResult<i32> {
    if nth == 0 || nth.abs() > 4 {
        return Err(CliError::InvalidOrdinal(nth));
    }
    Ok(nth)
}

/// Returns the English month name (1-12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
