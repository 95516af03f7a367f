//! Day iteration and CSV report printing.
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

use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::cli::Cli;
use crate::error::Result;
use crate::holiday::HolidayMap;

/// Row date format (DD.MM.YYYY)
const DATE_FMT: &str = "%d.%m.%Y";
/// Holiday lookup key format (ISO-8601)
const ISO_FMT: &str = "%Y-%m-%d";
/// 3-letter day-name abbreviation
const DAY_FMT: &str = "%a";
/// Summary period format (YYYY/MM)
const PERIOD_FMT: &str = "%Y/%m";

/// Description emitted for holiday rows. The holiday name from the mapping
/// is intentionally not surfaced; every holiday gets this generic label.
const DESC_PUBLIC_HOLIDAY: &str = "public holiday";

/// Workday calendar report for one target month
pub struct Report<'a> {
    /// First day of the target month, validated by the caller
    first_day: NaiveDate,
    /// Date → name lookup of public holidays; possibly empty
    holidays: &'a HolidayMap,
    /// Whether rows carry a day-name column
    include_day_names: bool,
    /// Whether Saturday/Sunday rows are emitted
    include_weekends: bool,
}

impl<'a> Report<'a> {
    /// Creates a report from parsed command-line arguments
    ///
    /// # Arguments
    /// * `cli` - Parsed arguments providing the output-shaping flags
    /// * `first_day` - First day of the target period, already validated
    /// * `holidays` - Holiday mapping built before iteration
    pub fn new(cli: &Cli, first_day: NaiveDate, holidays: &'a HolidayMap) -> Self {
        Report {
            first_day,
            holidays,
            include_day_names: cli.include_day_names(),
            include_weekends: cli.include_weekends(),
        }
    }

    /// Writes the full report: header, day rows, separator, summary
    ///
    /// # Algorithm
    /// Walks every calendar date of the target month in ascending order.
    /// A date present in the holiday mapping gets hours=0 and the generic
    /// holiday label, overriding weekday/weekend classification. Otherwise
    /// Monday-Friday gets hours=8 and counts as a workday, weekends get
    /// hours=0. Weekend rows (holiday or not) are emitted only when
    /// weekend inclusion is enabled.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.include_day_names {
            writeln!(out, "date,day,hours,description")?;
        } else {
            writeln!(out, "date,hours,description")?;
        }

        let mut workday_count: u32 = 0;
        let mut day = self.first_day;

        // As long as we're within the same year and month
        while day.year() == self.first_day.year() && day.month() == self.first_day.month() {
            let is_weekend = matches!(day.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun);
            let is_holiday = self
                .holidays
                .contains_key(&day.format(ISO_FMT).to_string());

            let (hours, description) = if is_holiday {
                // Holidays override the weekday classification
                (0, DESC_PUBLIC_HOLIDAY)
            } else if is_weekend {
                (0, "")
            } else {
                workday_count += 1;
                (8, "")
            };

            if !is_weekend || self.include_weekends {
                if self.include_day_names {
                    writeln!(
                        out,
                        "{},{},{},{}",
                        day.format(DATE_FMT),
                        day.format(DAY_FMT),
                        hours,
                        description
                    )?;
                } else {
                    writeln!(out, "{},{},{}", day.format(DATE_FMT), hours, description)?;
                }
            }

            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        writeln!(out, "---")?;
        writeln!(
            out,
            "There are {} workdays in {}. Enjoy!",
            workday_count,
            self.first_day.format(PERIOD_FMT)
        )?;

        Ok(())
    }
}
