//! Weekday parsing.

use chrono::Weekday;

use crate::error::{QuorumError, QuorumResult};

/// Parses a weekday from its English name or three-letter abbreviation.
///
/// Matching is case-insensitive: `"mon"`, `"Mon"`, and `"MONDAY"` all parse
/// to `Weekday::Mon`.
///
/// # Errors
///
/// Returns `QuorumError::InvalidWeekday` for anything else.
pub fn parse_weekday(token: &str) -> QuorumResult<Weekday> {
    match token.to_ascii_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(QuorumError::invalid_weekday(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_abbreviations() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("TUE").unwrap(), Weekday::Tue);
        assert_eq!(parse_weekday("Sun").unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_parse_full_names() {
        assert_eq!(parse_weekday("friday").unwrap(), Weekday::Fri);
        assert_eq!(parse_weekday("Saturday").unwrap(), Weekday::Sat);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            parse_weekday("frisday"),
            Err(QuorumError::InvalidWeekday { .. })
        ));
        assert!(parse_weekday("").is_err());
        assert!(parse_weekday("m").is_err());
    }
}
