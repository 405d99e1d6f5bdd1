//! Holiday definitions and per-year resolution.
//!
//! A [`HolidayCalendar`] is an ordered list of [`HolidayDefinition`] values
//! valid over a fixed range of years. Resolving it for one year produces the
//! observed holiday dates: weekend holidays flagged for Mondayization shift
//! forward to the following Monday, and when two of them land on the same
//! Monday the later-listed one is displaced to Tuesday.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use crate::error::{QuorumError, QuorumResult};
use crate::rules::YearlyRule;
use crate::types::Date;

pub mod nz;

/// Where a holiday's date for a given year comes from.
#[derive(Debug, Clone)]
enum HolidaySource {
    /// Explicit year -> date table.
    Fixed(BTreeMap<i32, Date>),
    /// Derived from an ordinal-weekday rule each year.
    Rule(YearlyRule),
}

/// A single named holiday and how its observed date is determined.
#[derive(Debug, Clone)]
pub struct HolidayDefinition {
    description: String,
    mondayize: bool,
    source: HolidaySource,
}

impl HolidayDefinition {
    /// Creates a holiday from an explicit year -> date table.
    pub fn fixed(
        description: impl Into<String>,
        mondayize: bool,
        dates: impl IntoIterator<Item = (i32, Date)>,
    ) -> Self {
        Self {
            description: description.into(),
            mondayize,
            source: HolidaySource::Fixed(dates.into_iter().collect()),
        }
    }

    /// Creates a holiday derived from an ordinal-weekday rule each year.
    pub fn rule(description: impl Into<String>, mondayize: bool, rule: YearlyRule) -> Self {
        Self {
            description: description.into(),
            mondayize,
            source: HolidaySource::Rule(rule),
        }
    }

    /// Creates a holiday that falls on the same month and day every year,
    /// materialized across the given years.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::InvalidDate` when `month`/`day` is not a valid
    /// date in every year of the range (e.g. February 29).
    pub fn anniversary(
        description: impl Into<String>,
        month: u32,
        day: u32,
        mondayize: bool,
        years: RangeInclusive<i32>,
    ) -> QuorumResult<Self> {
        let mut dates = BTreeMap::new();
        for year in years {
            dates.insert(year, Date::from_ymd(year, month, day)?);
        }
        Ok(Self {
            description: description.into(),
            mondayize,
            source: HolidaySource::Fixed(dates),
        })
    }

    /// Returns the holiday's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true when a weekend occurrence shifts to the next Monday.
    #[must_use]
    pub fn mondayize(&self) -> bool {
        self.mondayize
    }

    /// Returns the raw (pre-Mondayization) date for a year.
    fn date_for(&self, year: i32) -> QuorumResult<Date> {
        match &self.source {
            HolidaySource::Fixed(dates) => dates
                .get(&year)
                .copied()
                .ok_or_else(|| QuorumError::missing_holiday_date(&self.description, year)),
            HolidaySource::Rule(rule) => rule.date_in(year),
        }
    }
}

/// One holiday's resolved dates for a year: where it fell and where it is
/// observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedHoliday {
    /// Description of the holiday.
    pub description: String,
    /// The date the holiday actually falls on.
    pub date: Date,
    /// The date the holiday is observed on; equals `date` unless Mondayized.
    pub observed: Date,
}

impl ObservedHoliday {
    /// True when the observed date differs from the actual date.
    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.observed != self.date
    }
}

/// An ordered set of holiday definitions valid over a range of years.
///
/// Definition order matters: when two Mondayized weekend holidays collide on
/// the same Monday, the later-listed one is displaced to Tuesday.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    definitions: Vec<HolidayDefinition>,
    years: RangeInclusive<i32>,
}

impl HolidayCalendar {
    /// Creates a calendar from an ordered list of definitions and the years
    /// they cover.
    pub fn new(definitions: Vec<HolidayDefinition>, years: RangeInclusive<i32>) -> Self {
        Self { definitions, years }
    }

    /// Returns the supported year range.
    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    /// Returns the holiday definitions in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    /// Returns true when holiday data exists for the year.
    #[must_use]
    pub fn is_supported(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Resolves every holiday to its observed date for a year, in
    /// declaration order.
    ///
    /// A raw date produced by more than one definition contributes only
    /// once, through the first definition listing it.
    ///
    /// # Errors
    ///
    /// Returns `QuorumError::UnsupportedYear` outside the supported range
    /// and `QuorumError::MissingHolidayDate` when a fixed table has a gap.
    pub fn observed(&self, year: i32) -> QuorumResult<Vec<ObservedHoliday>> {
        if !self.is_supported(year) {
            return Err(QuorumError::unsupported_year(
                year,
                *self.years.start(),
                *self.years.end(),
            ));
        }

        let mut resolved: Vec<ObservedHoliday> = Vec::with_capacity(self.definitions.len());
        let mut raw_seen = BTreeSet::new();
        let mut taken = BTreeSet::new();

        for definition in &self.definitions {
            let date = definition.date_for(year)?;
            if !raw_seen.insert(date) {
                continue;
            }

            let observed = if definition.mondayize() && date.is_weekend() {
                let monday = next_monday(date);
                if taken.contains(&monday) {
                    monday.add_days(1)
                } else {
                    monday
                }
            } else {
                date
            };
            taken.insert(observed);

            resolved.push(ObservedHoliday {
                description: definition.description.clone(),
                date,
                observed,
            });
        }

        Ok(resolved)
    }

    /// Resolves the set of observed holiday dates for a year.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HolidayCalendar::observed`].
    pub fn resolve(&self, year: i32) -> QuorumResult<BTreeSet<Date>> {
        Ok(self
            .observed(year)?
            .into_iter()
            .map(|holiday| holiday.observed)
            .collect())
    }
}

/// Returns the Monday on or after the given date.
fn next_monday(date: Date) -> Date {
    let ahead = (7 - i64::from(date.weekday().num_days_from_monday())).rem_euclid(7);
    date.add_days(ahead)
}
