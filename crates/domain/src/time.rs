//! Report dates and timestamp display helpers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Calendar day a statistics snapshot refers to, always rendered `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Today in the platform's local timezone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The day before [`today`](Self::today).
    #[must_use]
    pub fn yesterday() -> Self {
        Self::today().previous_day()
    }

    /// Wrap an existing calendar date.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Subtract one day. Saturates at the earliest representable date.
    #[must_use]
    pub fn previous_day(self) -> Self {
        Self(self.0.checked_sub_days(Days::new(1)).unwrap_or(self.0))
    }

    /// Parse a date selector value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingDate`] for blank input and
    /// [`ValidationError::InvalidDate`] when the value is not `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
    }

    /// Human-readable long form, e.g. `March 5, 2025`.
    #[must_use]
    pub fn long_format(self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ReportDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Render the `lastUpdated` field of a contribution snapshot.
///
/// The server has sent both full timestamps and bare dates here, so each shape
/// is tried in turn. Empty input yields `N/A`; anything unrecognised is shown as-is.
#[must_use]
pub fn format_last_updated(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(date) = ReportDate::parse(raw) {
        return date.long_format();
    }
    raw.to_string()
}
