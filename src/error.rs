//! Error types for workday report generation.
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

use thiserror::Error;

/// Result type for report generation
pub type Result<T> = std::result::Result<T, WorkcalError>;

/// Fatal errors; every variant aborts the run, nothing is recovered
#[derive(Error, Debug)]
pub enum WorkcalError {
    /// Year/month combination that does not form a valid calendar date
    #[error("invalid target period: {year:04}-{month:02} is not a valid calendar month")]
    InvalidPeriod { year: i32, month: u32 },

    /// Holiday lookup requested but the HTTP client is not compiled in.
    /// Kept distinct from [`WorkcalError::Fetch`] so a misconfigured build
    /// can be told apart from an unreachable service.
    #[error("no such capability: holiday lookup requires the `holiday-api` feature")]
    CapabilityUnavailable,

    /// Network or HTTP failure while fetching holidays (timeout, connection
    /// error, non-2xx status)
    #[cfg(feature = "holiday-api")]
    #[error("holiday fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failure while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_period_names_the_period() {
        let err = WorkcalError::InvalidPeriod { year: 2023, month: 13 };
        assert_eq!(
            err.to_string(),
            "invalid target period: 2023-13 is not a valid calendar month"
        );
    }

    #[test]
    fn capability_error_is_distinct_from_fetch_errors() {
        let err = WorkcalError::CapabilityUnavailable;
        assert!(err.to_string().contains("no such capability"));
    }
}
