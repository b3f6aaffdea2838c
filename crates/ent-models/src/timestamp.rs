//! Wire timestamp
//!
//! A point in time with nanosecond precision, restricted to the range
//! 0001-01-01T00:00:00Z ..= 9999-12-31T23:59:59.999999999Z. Serialized as an
//! RFC 3339 string in UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Seconds of 0001-01-01T00:00:00Z
pub const MIN_SECONDS: i64 = -62_135_596_800;
/// Seconds of 9999-12-31T23:59:59Z
pub const MAX_SECONDS: i64 = 253_402_300_799;

const MAX_NANOS: u32 = 999_999_999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp {seconds}s is outside 0001-01-01 ..= 9999-12-31")]
    OutOfRange { seconds: i64 },

    #[error("timestamp nanos {nanos} is outside 0 ..= 999999999")]
    InvalidNanos { nanos: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        // Construction guarantees the range, which chrono always represents.
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos as u32).unwrap_or_default()
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        let seconds = value.timestamp();
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(TimestampError::OutOfRange { seconds });
        }

        // chrono encodes leap seconds as nanos >= 1e9
        let nanos = value.timestamp_subsec_nanos();
        if nanos > MAX_NANOS {
            return Err(TimestampError::InvalidNanos { nanos });
        }

        Ok(Self {
            seconds,
            nanos: nanos as i32,
        })
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.as_datetime()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_datetime().to_rfc3339_opts(SecondsFormat::AutoSi, true))
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
        let parsed = DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)?;
        Timestamp::try_from(parsed.with_timezone(&Utc)).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2021, 3, 1, 10, 30, 0).unwrap();
        let ts = Timestamp::try_from(dt).unwrap();

        assert_eq!(ts.seconds(), dt.timestamp());
        assert_eq!(ts.nanos(), 0);
        assert_eq!(ts.as_datetime(), dt);
    }

    #[test]
    fn test_range_limits() {
        let first = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Timestamp::try_from(first).unwrap().seconds(), MIN_SECONDS);

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(Timestamp::try_from(last).unwrap().seconds(), MAX_SECONDS);

        let too_late = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            Timestamp::try_from(too_late),
            Err(TimestampError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_serializes_as_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2099, 6, 15, 14, 0, 0).unwrap();
        let ts = Timestamp::try_from(dt).unwrap();

        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2099-06-15T14:00:00Z\"");

        let back: Timestamp = serde_json::from_str("\"2099-06-15T16:00:00+02:00\"").unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_rejects_malformed_string() {
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }
}
