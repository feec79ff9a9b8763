//! Date range resolution for commit selection.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

/// Epoch-second bounds for commit selection, exclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest bound in epoch seconds (commits must be strictly after).
    pub start: i64,
    /// Latest bound in epoch seconds (commits must be strictly before).
    pub end: i64,
}

impl DateRange {
    /// Resolves optional `YYYY-MM-DD` bounds to epoch seconds.
    ///
    /// An absent start resolves to 0 and an absent end to `i64::MAX`.
    /// Dates resolve to UTC midnight. Malformed dates are fatal.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = match start {
            Some(date) => parse_date(date)?,
            None => 0,
        };
        let end = match end {
            Some(date) => parse_date(date)?,
            None => i64::MAX,
        };

        Ok(Self { start, end })
    }

    /// Returns true when the timestamp falls strictly between the bounds.
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp > self.start && timestamp < self.end
    }
}

/// Parses a `YYYY-MM-DD` date string to UTC midnight in epoch seconds.
fn parse_date(date: &str) -> Result<i64> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{date}', expected YYYY-MM-DD"))?;

    Ok(parsed.and_time(NaiveTime::MIN).and_utc().timestamp())
}
