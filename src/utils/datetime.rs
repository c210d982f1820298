//! Lenient parsing of the zone-less date-times used for camp event dates.
//!
//! Accepted inputs, in order of preference:
//! - `2018-10-18T09:00:00` (optionally with fractional seconds)
//! - `2018-10-18 09:00:00`
//! - RFC 3339 with an offset, e.g. `2018-10-18T09:00:00-04:00` (wall-clock time is kept)
//! - `2018-10-18` (midnight)

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a date or date-time string. Returns `None` if no accepted form matches.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Serde adapter: writes `YYYY-MM-DDTHH:MM:SS`, reads anything [`parse_date_time`] accepts.
pub mod flexible {
    use super::{CANONICAL_FORMAT, parse_date_time};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(CANONICAL_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}
