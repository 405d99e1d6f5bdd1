//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{HolidaysArgs, PlanArgs};

/// Quorum - recurring meeting dates that avoid public holidays
#[derive(Parser)]
#[command(name = "quorum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the meeting date for every month of a year
    Plan(PlanArgs),

    /// List the observed holiday dates for a year
    Holidays(HolidaysArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
