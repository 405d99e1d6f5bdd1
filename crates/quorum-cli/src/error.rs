//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unrecognized weekday name.
    #[error("Invalid weekday: {0}. Use mon, tue, wed, thu, fri, sat, or sun.")]
    InvalidWeekday(String),

    /// Ordinal outside the supported range.
    #[error("Invalid ordinal: {0}. Use 1 to 4 counting from the month start, or -1 to -4 from the end.")]
    InvalidOrdinal(i32),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
