//! Error types for the quorum library.
//!
//! Every error here is detected eagerly, at rule construction or calendar
//! resolution time; the date arithmetic itself never fails once its inputs
//! have been validated.

use thiserror::Error;

/// A specialized Result type for quorum operations.
pub type QuorumResult<T> = Result<T, QuorumError>;

/// The main error type for quorum operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuorumError {
    /// Rule ordinal outside the representable range.
    #[error("Invalid ordinal: {value}. Must be between -4 and 4 and non-zero.")]
    InvalidOrdinal {
        /// The rejected ordinal.
        value: i32,
    },

    /// Unrecognized weekday name or abbreviation.
    #[error("Invalid weekday: {token:?}")]
    InvalidWeekday {
        /// The token that failed to parse.
        token: String,
    },

    /// Error in date calculations or invalid date components.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Year outside the calendar's supported range.
    #[error("Unsupported year: {year}. Holiday data covers {min}-{max}.")]
    UnsupportedYear {
        /// The requested year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// A fixed-date holiday table has no entry for a supported year.
    ///
    /// This is a data-consistency fault in the holiday table, not a user
    /// input error.
    #[error("No date on record for {description:?} in {year}")]
    MissingHolidayDate {
        /// Description of the affected holiday.
        description: String,
        /// The year with no entry.
        year: i32,
    },

    /// Zero or duplicate day offsets in an adjustment policy.
    #[error("Invalid adjustment policy: {reason}")]
    InvalidAdjustmentPolicy {
        /// Description of what is wrong with the offsets.
        reason: String,
    },
}

impl QuorumError {
    /// Creates an invalid ordinal error.
    #[must_use]
    pub fn invalid_ordinal(value: i32) -> Self {
        Self::InvalidOrdinal { value }
    }

    /// Creates an invalid weekday error.
    #[must_use]
    pub fn invalid_weekday(token: impl Into<String>) -> Self {
        Self::InvalidWeekday {
            token: token.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported year error.
    #[must_use]
    pub fn unsupported_year(year: i32, min: i32, max: i32) -> Self {
        Self::UnsupportedYear { year, min, max }
    }

    /// Creates a missing holiday data error.
    #[must_use]
    pub fn missing_holiday_date(description: impl Into<String>, year: i32) -> Self {
        Self::MissingHolidayDate {
            description: description.into(),
            year,
        }
    }

    /// Creates an invalid adjustment policy error.
    #[must_use]
    pub fn invalid_adjustment_policy(reason: impl Into<String>) -> Self {
        Self::InvalidAdjustmentPolicy {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuorumError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unsupported_year_display() {
        let err = QuorumError::unsupported_year(1999, 2014, 2030);
        assert!(err.to_string().contains("1999"));
        assert!(err.to_string().contains("2014-2030"));
    }
}
