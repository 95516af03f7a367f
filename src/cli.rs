//! Command-line interface for the workday calendar printer.
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

use std::fmt;

use chrono::{Datelike, NaiveDate};
use clap::{builder::TypedValueParser, Parser};

use crate::error::{Result, WorkcalError};

/// Help message for the country code flag
const COUNTRY_HELP_MSG: &str = "Country code must be exactly 2 characters, e.g. \"DE\" or \"cz\"";

/// Command-line interface structure
#[derive(Parser)]
#[command(
    version(env!("CARGO_PKG_VERSION")),
    author(env!("CARGO_PKG_AUTHORS")),
    about(env!("CARGO_PKG_DESCRIPTION")),
    long_about = "Prints one CSV row per day of the target month with the hours \
                 to be worked, optionally annotating public holidays fetched \
                 from the date.nager.at calendar service."
)]
pub struct Cli {
    /// Year to report on
    ///
    /// Defaults to the current year.
    #[arg(long, required = false, help = "Year (default: current year)")]
    year: Option<i32>,

    /// Month to report on
    ///
    /// Defaults to the current month. Validated only by date construction:
    /// anything outside 1-12 fails when the first day of the month is built.
    #[arg(long, required = false, help = "Month (default: current month)")]
    month: Option<u32>,

    /// Add a 3-letter day-name column to every row
    #[arg(long, help = "Include day names in the output")]
    include_day_names: bool,

    /// Emit rows for Saturday and Sunday as well
    #[arg(long, help = "Include weekends in the output")]
    include_weekends: bool,

    /// Country to resolve public holidays for
    ///
    /// Two-letter code as used by date.nager.at (e.g. "DE", "CZ").
    /// When absent, no holiday lookup is performed.
    #[arg(
        long,
        required = false,
        value_parser = CountryCodeParser,
        help = COUNTRY_HELP_MSG
    )]
    country_code: Option<CountryCode>,
}

impl Cli {
    /// Resolves the target period, defaulting year and month from `today`
    ///
    /// # Arguments
    /// * `today` - The current date, passed in explicitly so that default
    ///   resolution stays deterministic under test
    pub fn target(&self, today: NaiveDate) -> Target {
        Target {
            year: self.year.unwrap_or_else(|| today.year()),
            month: self.month.unwrap_or_else(|| today.month()),
        }
    }

    /// Returns whether rows carry a day-name column
    pub fn include_day_names(&self) -> bool {
        self.include_day_names
    }

    /// Returns whether weekend rows are emitted
    pub fn include_weekends(&self) -> bool {
        self.include_weekends
    }

    /// Returns the validated country code, if one was given
    pub fn country_code(&self) -> Option<&CountryCode> {
        self.country_code.as_ref()
    }
}

/// The (year, month) pair the report is generated for.
/// Immutable once resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    year: i32,
    month: u32,
}

impl Target {
    /// Returns the target year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the target month (1-12 once validated)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Builds the first day of the target month
    ///
    /// This is the only month/year validation performed: an out-of-range
    /// month or otherwise impossible date surfaces here as
    /// [`WorkcalError::InvalidPeriod`].
    pub fn first_day(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(WorkcalError::InvalidPeriod {
            year: self.year,
            month: self.month,
        })
    }
}

/// Validated two-letter country code, stored uppercased
#[derive(Clone, Debug, PartialEq)]
pub struct CountryCode(String);

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Custom parser for country code values
#[derive(Clone)]
struct CountryCodeParser;

impl TypedValueParser for CountryCodeParser {
    type Value = CountryCode;

    /// Parses and validates a country code from the command line
    ///
    /// # Arguments
    /// * `value` - String value from command line
    ///
    /// # Returns
    /// * `Result<CountryCode, clap::Error>` - Uppercased code or usage error
    ///
    /// # Validation
    /// Only the length is checked (exactly 2 characters); no ISO-3166
    /// membership test is performed locally. The remote service rejects
    /// unknown codes on its own.
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> std::result::Result<Self::Value, clap::Error> {
        let Some(value_str) = value.to_str() else {
            return Err(clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                COUNTRY_HELP_MSG,
            ));
        };

        if value_str.chars().count() != 2 {
            return Err(clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                COUNTRY_HELP_MSG,
            ));
        }

        Ok(CountryCode(value_str.to_uppercase()))
    }
}
