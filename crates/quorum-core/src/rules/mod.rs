//! Ordinal-weekday date rules.
//!
//! A rule such as "4th Monday" or "last Friday" identifies exactly one date
//! in any month; [`MonthlyRule`] evaluates it for a `(year, month)` pair and
//! [`YearlyRule`] pins it to a fixed month for holidays defined by rule.

mod monthly;
mod yearly;

pub use monthly::MonthlyRule;
pub use yearly::YearlyRule;
