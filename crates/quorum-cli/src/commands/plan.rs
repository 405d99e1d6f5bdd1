//! Plan command implementation.
//!
//! Computes the meeting date for every month of a year and relocates any
//! date that collides with an observed holiday.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use quorum_core::holidays::nz;
use quorum_core::rules::MonthlyRule;
use quorum_core::schedule::{plan_year, AdjustmentPolicy, Outcome};
use quorum_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::{month_name, parse_weekday, validate_ordinal};
use crate::output::{print_header, print_output, print_warning};

/// Arguments for the plan command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Which occurrence of the weekday (1-4 from the month start, -1 to -4
    /// from the end)
    #[arg(short, long, allow_hyphen_values = true)]
    pub nth: i32,

    /// Weekday the meeting falls on (e.g. mon, tuesday)
    #[arg(short, long)]
    pub weekday: String,

    /// Year to plan
    #[arg(short, long)]
    pub year: i32,

    /// Day offsets tried, in order, when a meeting lands on a holiday
    /// (e.g. --adjust=-7,7)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub adjust: Vec<i64>,
}

/// One row of the planning result.
#[derive(Debug, Serialize, Tabled)]
pub struct MeetingRow {
    /// Month name.
    #[tabled(rename = "Month")]
    pub month: String,
    /// Final meeting date.
    #[tabled(rename = "Date")]
    pub date: Date,
    /// What happened to the candidate date.
    #[tabled(rename = "Status")]
    pub status: String,
}

/// Execute the plan command.
pub fn execute(args: PlanArgs, format: OutputFormat) -> Result<()> {
    let nth = validate_ordinal(args.nth)?;
    let weekday = parse_weekday(&args.weekday)?;

    let rule = MonthlyRule::new(nth, weekday)?;
    let policy = AdjustmentPolicy::new(args.adjust)?;

    let meetings = plan_year(&rule, args.year, nz::calendar(), &policy)?;

    let rows: Vec<MeetingRow> = meetings
        .iter()
        .map(|meeting| MeetingRow {
            month: month_name(meeting.month).to_string(),
            date: meeting.date,
            status: meeting.outcome.to_string(),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Meetings for {} ({})", args.year, rule));
    }
    print_output(&rows, format)?;

    let stuck = meetings
        .iter()
        .filter(|m| m.outcome == Outcome::CannotMove)
        .count();
    if stuck > 0 {
        print_warning(&format!(
            "{stuck} meeting(s) fall on a holiday and could not be moved within their month"
        ));
    }

    Ok(())
}
