//! Holidays command implementation.
//!
//! Lists the observed New Zealand holiday dates for a year.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use quorum_core::holidays::nz;
use quorum_core::types::Date;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Year to resolve
    #[arg(short, long)]
    pub year: i32,
}

/// One resolved holiday row.
#[derive(Debug, Serialize, Tabled)]
pub struct HolidayRow {
    /// Holiday description.
    #[tabled(rename = "Holiday")]
    pub holiday: String,
    /// The date the holiday falls on.
    #[tabled(rename = "Date")]
    pub date: Date,
    /// The date the holiday is observed on.
    #[tabled(rename = "Observed")]
    pub observed: Date,
    /// Whether the observed date was shifted off a weekend.
    #[tabled(rename = "Shifted")]
    pub shifted: String,
}

/// Execute the holidays command.
pub fn execute(args: HolidaysArgs, format: OutputFormat) -> Result<()> {
    let resolved = nz::calendar().observed(args.year)?;

    let rows: Vec<HolidayRow> = resolved
        .iter()
        .map(|holiday| HolidayRow {
            holiday: holiday.description.clone(),
            date: holiday.date,
            observed: holiday.observed,
            shifted: if holiday.is_shifted() { "yes" } else { "-" }.to_string(),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("New Zealand holidays, {}", args.year));
    }
    print_output(&rows, format)?;

    Ok(())
}
