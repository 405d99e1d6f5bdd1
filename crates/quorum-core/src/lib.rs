//! # Quorum Core
//!
//! Date rules, holiday calendars, and collision resolution for the quorum
//! meeting planner.
//!
//! This crate answers one question: on which day of each month should a
//! recurring meeting fall, given an ordinal-weekday rule ("4th Monday",
//! "last Friday") and a table of public holidays whose observed dates may
//! shift off weekends?
//!
//! - **Types**: [`types::Date`] and weekday parsing
//! - **Rules**: [`rules::MonthlyRule`] and [`rules::YearlyRule`]
//! - **Holidays**: [`holidays::HolidayCalendar`] with Mondayization
//! - **Scheduling**: [`schedule::plan_year`] with ordered day-offset
//!   adjustments
//!
//! ## Example
//!
//! ```rust
//! use chrono::Weekday;
//! use quorum_core::prelude::*;
//!
//! // 4th Monday of every month in 2015, dodging NZ statutory holidays
//! // by trying one week earlier.
//! let rule = MonthlyRule::new(4, Weekday::Mon).unwrap();
//! let policy = AdjustmentPolicy::new(vec![-7]).unwrap();
//! let meetings = plan_year(&rule, 2015, quorum_core::holidays::nz::calendar(), &policy).unwrap();
//!
//! assert_eq!(meetings.len(), 12);
//! // June's meeting is untouched: the 22nd is no holiday.
//! assert_eq!(meetings[5].date.to_string(), "2015-06-22");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod error;
pub mod holidays;
pub mod rules;
pub mod schedule;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{QuorumError, QuorumResult};
    pub use crate::holidays::{HolidayCalendar, HolidayDefinition, ObservedHoliday};
    pub use crate::rules::{MonthlyRule, YearlyRule};
    pub use crate::schedule::{plan_year, AdjustmentPolicy, Meeting, Outcome};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{QuorumError, QuorumResult};
pub use types::Date;
