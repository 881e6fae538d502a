//! Serde codec for Pinterest timestamps.
//!
//! The API sends `created_at` without an offset (`2017-08-02T18:30:29`),
//! always in UTC, sometimes with fractional seconds. RFC 3339 input is
//! accepted too. Values are written back in the offset-less form, keeping
//! any fraction, so a decoded model re-encodes to the same JSON.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

// `%.f` matches an absent fraction and prints none for whole seconds.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, FORMAT).map(|naive| naive.and_utc()))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => parse(&raw).map_err(de::Error::custom),
        _ => Ok(DateTime::default()),
    }
}
