//! Public holiday resolution via the date.nager.at calendar service.
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

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::cli::CountryCode;
use crate::error::Result;

/// Base URL of the public holiday API (v3)
#[cfg(feature = "holiday-api")]
const HOLIDAY_API_BASE: &str = "https://date.nager.at/api/v3/publicholidays";

/// Holiday type marking a nationwide public holiday
const PUBLIC_TYPE: &str = "public";

/// Fixed timeout for the single holiday request
#[cfg(feature = "holiday-api")]
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Mapping from ISO-8601 date string ("YYYY-MM-DD") to holiday name.
/// Built once before iteration, read-only afterwards.
pub type HolidayMap = HashMap<String, String>;

/// One holiday record as returned by the calendar service
///
/// Only `date`, `name` and `types` are of interest; the service sends more
/// fields (localName, countryCode, counties, ...) which are ignored.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// ISO-8601 date string ("YYYY-MM-DD")
    date: String,
    /// English holiday name
    #[serde(default)]
    name: String,
    /// Type tags such as "Public", "Bank", "School"; may be absent or null
    #[serde(default)]
    types: Option<Vec<String>>,
}

impl HolidayRecord {
    /// Checks whether any type tag equals "public", case-insensitively
    fn is_public(&self) -> bool {
        self.types
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(PUBLIC_TYPE))
    }
}

/// Builds the holiday mapping from a sequence of records
///
/// # Arguments
/// * `records` - Holiday records from any source, not necessarily the network
///
/// # Returns
/// * `HolidayMap` - date → name for every record tagged public; non-public
///   and regional-only entries are dropped. On duplicate dates the last
///   record wins.
pub fn public_holidays<I>(records: I) -> HolidayMap
where
    I: IntoIterator<Item = HolidayRecord>,
{
    records
        .into_iter()
        .filter(HolidayRecord::is_public)
        .map(|record| (record.date, record.name))
        .collect()
}

/// Resolves the holiday mapping for a year and optional country
///
/// # Arguments
/// * `year` - Target year of the report
/// * `country_code` - Two-letter country code, already validated and
///   uppercased by the CLI layer
///
/// # Returns
/// * `Ok(HolidayMap)` - Empty without a country code (no network access),
///   otherwise the filtered mapping from a single service request
/// * `Err(_)` - Fatal fetch or capability error; never retried
pub async fn resolve(year: i32, country_code: Option<&CountryCode>) -> Result<HolidayMap> {
    let Some(code) = country_code else {
        debug!("no country code given, skipping holiday lookup");
        return Ok(HolidayMap::new());
    };

    let records = fetch(year, code).await?;
    let holidays = public_holidays(records);
    debug!("{} public holidays resolved for {}/{}", holidays.len(), code, year);

    Ok(holidays)
}

/// Fetches the raw holiday records for a year and country
///
/// Issues exactly one GET against the calendar service with a 30-second
/// timeout. A timeout, connection error or non-2xx status is fatal.
#[cfg(feature = "holiday-api")]
async fn fetch(year: i32, code: &CountryCode) -> Result<Vec<HolidayRecord>> {
    let url = format!("{}/{}/{}", HOLIDAY_API_BASE, year, code);
    debug!("fetching holidays from {}", url);

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let records = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<HolidayRecord>>()
        .await?;

    debug!("{} holiday records received", records.len());
    Ok(records)
}

/// Stub used when the HTTP client is not compiled in.
/// A requested lookup fails with the distinct capability error so the
/// caller can tell a build problem from an unreachable service.
#[cfg(not(feature = "holiday-api"))]
async fn fetch(_year: i32, _code: &CountryCode) -> Result<Vec<HolidayRecord>> {
    Err(crate::error::WorkcalError::CapabilityUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, name: &str, types: &[&str]) -> HolidayRecord {
        HolidayRecord {
            date: date.to_string(),
            name: name.to_string(),
            types: Some(types.iter().map(|t| t.to_string()).collect()),
        }
    }

    #[test]
    fn public_type_matches_case_insensitively() {
        let holidays = public_holidays(vec![
            record("2023-01-01", "New Year's Day", &["Public"]),
            record("2023-01-06", "Epiphany", &["PUBLIC", "Bank"]),
            record("2023-04-07", "Good Friday", &["public"]),
        ]);

        assert_eq!(holidays.len(), 3);
        assert_eq!(holidays["2023-01-01"], "New Year's Day");
    }

    #[test]
    fn non_public_records_are_dropped() {
        let holidays = public_holidays(vec![
            record("2023-08-15", "Assumption Day", &["Bank"]),
            record("2023-10-31", "Reformation Day", &["School", "Optional"]),
            record("2023-12-24", "Christmas Eve", &[]),
        ]);

        assert!(holidays.is_empty());
    }

    #[test]
    fn last_record_wins_on_duplicate_dates() {
        let holidays = public_holidays(vec![
            record("2023-01-02", "New Year Holiday", &["Public"]),
            record("2023-01-02", "Day after New Year's Day", &["Public"]),
        ]);

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays["2023-01-02"], "Day after New Year's Day");
    }

    #[tokio::test]
    async fn absent_country_code_yields_empty_map() {
        // No code, no lookup: the resolver returns before any fetch
        let holidays = resolve(2023, None).await.unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn deserializes_service_response_shape() {
        // Trimmed from a real date.nager.at v3 response; unknown fields
        // must be ignored and a null types list tolerated.
        let body = r#"[
            {
                "date": "2023-01-01",
                "localName": "Nieuwjaarsdag",
                "name": "New Year's Day",
                "countryCode": "NL",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            },
            {
                "date": "2023-02-14",
                "localName": "Valentijnsdag",
                "name": "Valentine's Day",
                "countryCode": "NL",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": null
            }
        ]"#;

        let records: Vec<HolidayRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);

        let holidays = public_holidays(records);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays["2023-01-01"], "New Year's Day");
    }
}
