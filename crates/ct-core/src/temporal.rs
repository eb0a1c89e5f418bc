//! # Temporal Types — Canonical UTC Timestamps
//!
//! Defines `Timestamp`, the single timestamp type used across the
//! civic-transparency records (`Series.generated_at`, `Point.timestamp`,
//! run/meta fields).
//!
//! ## Canonical Form
//!
//! All timestamps serialize as ISO 8601 / RFC 3339 in UTC with `Z` suffix
//! and seconds precision: `YYYY-MM-DDTHH:MM:SSZ`. Inputs may carry any
//! explicit offset (`+05:00`, `-04:00`, `+00:00`, `Z`) and are normalized
//! to UTC at construction; sub-second components are truncated. Naive
//! strings without an offset are rejected — the schemas require
//! timezone-aware values, and guessing a zone would silently shift buckets.
//!
//! Normalizing at construction rather than at serialization keeps record
//! equality and the JSON round-trip law trivially aligned: two records
//! built from `2026-02-07T05:00:00+05:00` and `2026-02-07T00:00:00Z`
//! are the same value and produce identical canonical output.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CtError;

/// A timezone-aware timestamp, normalized to UTC at seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string with explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 timestamp with an explicit offset.
    ///
    /// Any offset is accepted and converted to UTC. Sub-second components
    /// are truncated. Naive datetimes (no offset at all) fail RFC 3339
    /// parsing and are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CtError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339.
    pub fn parse(s: &str) -> Result<Self, CtError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CtError::InvalidTimestamp(format!("{s:?} is not RFC 3339 with offset: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// From a Unix epoch timestamp in seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, CtError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| CtError::InvalidTimestamp(format!("epoch seconds out of range: {secs}")))?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render the canonical form: `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
