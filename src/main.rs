//! Workday calendar printer with public holiday annotations.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::report::Report;

mod cli;
mod error;
mod holiday;
mod report;

/// Main entry point for the workday calendar printer
///
/// # Usage Examples
/// ```bash
/// # Print the current month's workdays
/// workcal
///
/// # Print January 2023 with weekends and day names
/// workcal --year 2023 --month 1 --include-weekends --include-day-names
///
/// # Annotate German public holidays
/// workcal --year 2023 --month 1 --country-code DE
/// ```
#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = cli::Cli::parse();

    // Any error aborts the run; there is no partial-success mode
    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Generates and prints the report for the parsed arguments
async fn run(cli: &cli::Cli) -> error::Result<()> {
    let target = cli.target(Local::now().date_naive());

    // Reject an impossible year/month before any network access
    let first_day = target.first_day()?;

    // Resolve holidays once, before iteration begins
    let holidays = holiday::resolve(target.year(), cli.country_code()).await?;

    let report = Report::new(cli, first_day, &holidays);
    let stdout = std::io::stdout();
    report.write(&mut stdout.lock())?;

    Ok(())
}
