//! Quorum CLI - recurring meeting dates that avoid public holidays.
//!
//! # Usage
//!
//! ```bash
//! # 4th Monday of every month in 2015, moved a week earlier on collision
//! quorum plan --nth 4 --weekday mon --year 2015 --adjust=-7
//!
//! # Last Friday of every month, trying a day earlier then a week earlier
//! quorum plan --nth=-1 --weekday fri --year 2016 --adjust=-1,-7
//!
//! # Observed New Zealand holiday dates for a year
//! quorum holidays --year 2022
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Plan(args) => commands::plan::execute(args, format)?,
        Commands::Holidays(args) => commands::holidays::execute(args, format)?,
    }

    Ok(())
}
