//! Meeting scheduling: holiday collision checks and adjustment search.
//!
//! A meeting date produced by a [`MonthlyRule`] may land on an observed
//! holiday. The caller supplies an [`AdjustmentPolicy`] - an ordered list of
//! day offsets - and the first offset whose result stays in the meeting's
//! month and clears the holiday set wins. Offsets are tried singly; no
//! combinations are attempted, and an exhausted policy is a reportable
//! outcome, not an error.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{QuorumError, QuorumResult};
use crate::holidays::HolidayCalendar;
use crate::rules::MonthlyRule;
use crate::types::Date;

/// Ordered day offsets tried, in order, to move a meeting off a holiday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustmentPolicy {
    offsets: Vec<i64>,
}

impl AdjustmentPolicy {
    /// Creates a policy from distinct, non-zero day offsets.
    ///
    /// Order defines trial precedence.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidAdjustmentPolicy` on a zero or repeated
    /// offset.
    pub fn new(offsets: Vec<i64>) -> QuorumResult<Self> {
        let mut seen = BTreeSet::new();
        for &offset in &offsets {
            if offset == 0 {
                return Err(QuorumError::invalid_adjustment_policy(
                    "offset 0 is not allowed",
                ));
            }
            if !seen.insert(offset) {
                return Err(QuorumError::invalid_adjustment_policy(format!(
                    "duplicate offset {offset}"
                )));
            }
        }
        Ok(Self { offsets })
    }

    /// A policy with no offsets; collisions are reported but never moved.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true when the policy holds no offsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the offsets in trial order.
    #[must_use]
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }
}

/// How a candidate meeting date fared against the holiday set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate did not collide with any holiday.
    Unmoved,
    /// The candidate collided and was moved by the contained day offset.
    Moved(i64),
    /// The candidate collided but no adjustment policy was supplied.
    NoPolicy,
    /// The candidate collided and no offset produced an acceptable date.
    CannotMove,
}

impl Outcome {
    /// True when the meeting still falls on a holiday.
    #[must_use]
    pub fn is_colliding(&self) -> bool {
        matches!(self, Outcome::NoPolicy | Outcome::CannotMove)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unmoved => write!(f, "unmoved"),
            Outcome::Moved(offset) => write!(f, "moved by {offset} days"),
            Outcome::NoPolicy => write!(f, "falls on holiday (no adjustment policy)"),
            Outcome::CannotMove => write!(f, "falls on holiday (cannot move)"),
        }
    }
}

/// A scheduled meeting for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeting {
    /// The month the meeting belongs to (1-12).
    pub month: u32,
    /// The final meeting date.
    pub date: Date,
    /// What happened to the rule's candidate date.
    pub outcome: Outcome,
}

/// Moves `candidate` off a holiday using the first acceptable offset.
///
/// An offset is acceptable when the shifted date stays inside the
/// candidate's month and is not itself an observed holiday. The search is a
/// plain first-match scan: precedence is exactly the order of the policy,
/// and offsets are never combined. When nothing fits, the original date
/// comes back tagged [`Outcome::CannotMove`].
#[must_use]
pub fn resolve_collision(
    candidate: Date,
    holidays: &BTreeSet<Date>,
    policy: &AdjustmentPolicy,
) -> (Date, Outcome) {
    if !holidays.contains(&candidate) {
        return (candidate, Outcome::Unmoved);
    }
    if policy.is_empty() {
        return (candidate, Outcome::NoPolicy);
    }

    for &offset in policy.offsets() {
        let trial = candidate.add_days(offset);
        if trial.month() == candidate.month() && !holidays.contains(&trial) {
            return (trial, Outcome::Moved(offset));
        }
    }

    (candidate, Outcome::CannotMove)
}

/// Plans the meeting for every month of `year`.
///
/// Resolves the holiday calendar once, evaluates the rule for each of the
/// twelve months, and applies collision resolution to each candidate.
///
/// # Errors
///
/// Fails when the year is outside the calendar's supported range or the
/// calendar's data is incomplete; collision resolution itself never fails.
pub fn plan_year(
    rule: &MonthlyRule,
    year: i32,
    calendar: &HolidayCalendar,
    policy: &AdjustmentPolicy,
) -> QuorumResult<Vec<Meeting>> {
    let holidays = calendar.resolve(year)?;

    let mut meetings = Vec::with_capacity(12);
    for month in 1..=12 {
        let candidate = rule.date_in(year, month)?;
        let (date, outcome) = resolve_collision(candidate, &holidays, policy);
        meetings.push(Meeting {
            month,
            date,
            outcome,
        });
    }
    Ok(meetings)
}
