// crates/shared-kernel/src/value_objects/timestamp.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// UTC instant used as the bound type of time-period ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Builds a timestamp from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when the value is outside the representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    pub const fn instant(&self) -> &DateTime<Utc> {
        &self.0
    }

    #[must_use]
    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Accepts RFC 3339 as well as the naive `%Y-%m-%d %H:%M:%S`,
/// `%Y-%m-%dT%H:%M:%S` and `%Y-%m-%d` forms, the latter read as UTC.
impl FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        try_rfc3339(s)
            .or_else(|| try_datetime_format(s, "%Y-%m-%d %H:%M:%S"))
            .or_else(|| try_datetime_format(s, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|| try_date_format(s))
            .ok_or_else(|| DomainError::InvalidTimestamp { input: s.to_string() })
    }
}

fn try_rfc3339(s: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| Timestamp(dt.with_timezone(&Utc)))
}

fn try_datetime_format(s: &str, fmt: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(s, fmt)
        .ok()
        .map(|ndt| Timestamp(ndt.and_utc()))
}

fn try_date_format(s: &str) -> Option<Timestamp> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|nd| nd.and_hms_opt(0, 0, 0))
        .map(|ndt| Timestamp(ndt.and_utc()))
}
