use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

const FLOATING_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A session start or end time.
///
/// The schedule API publishes local wall-clock times without an offset
/// (`2025-10-07T09:00:00`); other feeds may use full RFC 3339. Floating
/// times are interpreted in the viewer's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// RFC 3339 with an explicit offset
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time with no offset
    Floating(NaiveDateTime),
}

/// Returned when a string is neither RFC 3339 nor an ISO-8601 local date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp: {0:?}")]
pub struct TimestampParseError(pub String);

impl Timestamp {
    pub fn parse(input: &str) -> Result<Self, TimestampParseError> {
        let trimmed = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Timestamp::Zoned(dt));
        }
        FLOATING_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(Timestamp::Floating)
            .ok_or_else(|| TimestampParseError(input.to_string()))
    }

    /// Wall-clock time as seen from `tz`.
    pub fn wall_clock<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDateTime {
        match self {
            Timestamp::Zoned(dt) => dt.with_timezone(tz).naive_local(),
            Timestamp::Floating(naive) => *naive,
        }
    }

    /// Calendar day as seen from `tz`.
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.wall_clock(tz).date()
    }

    /// Absolute instant, resolving floating times in `tz`.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant;
    /// nonexistent ones (DST gap) fall back to treating the time as UTC.
    pub fn to_utc<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        match self {
            Timestamp::Zoned(dt) => dt.with_timezone(&Utc),
            Timestamp::Floating(naive) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(naive)),
        }
    }

    /// Milliseconds from `self` to `end`.
    pub fn millis_until<Tz: TimeZone>(&self, end: &Timestamp, tz: &Tz) -> i64 {
        match (self, end) {
            (Timestamp::Floating(start), Timestamp::Floating(end)) => {
                end.signed_duration_since(*start).num_milliseconds()
            }
            _ => end
                .to_utc(tz)
                .signed_duration_since(self.to_utc(tz))
                .num_milliseconds(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Floating(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
