//! # Temporal Conversions
//!
//! The document format carries time in two shapes: Unix timestamps as
//! JSON numbers (`state.lastchange`, `events[].timestamp`) and ISO 8601
//! strings with a timezone designator (`radio_show[].start`/`end`).
//!
//! The ISO 8601 strings published by spaces frequently omit seconds
//! (`2013-06-10T10:00Z`), which RFC 3339 does not allow. Both forms are
//! accepted; a missing timezone designator is rejected because the
//! instant would be ambiguous.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::SpaceApiError;

/// Convert a Unix timestamp in (possibly fractional) seconds to UTC.
///
/// # Errors
///
/// Returns `SpaceApiError::TimestampOutOfRange` for non-finite values and
/// instants chrono cannot represent.
pub fn from_unix(secs: f64) -> Result<DateTime<Utc>, SpaceApiError> {
    if !secs.is_finite() || secs.abs() > i64::MAX as f64 {
        return Err(SpaceApiError::TimestampOutOfRange(secs));
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
        .ok_or(SpaceApiError::TimestampOutOfRange(secs))
}

/// Parse an ISO 8601 combined date and time with a timezone designator.
///
/// Accepts RFC 3339 (`2013-06-10T10:00:00Z`) and the minute-precision form
/// (`2013-06-10T12:00+02:00`, `2013-06-10T10:00Z`).
///
/// # Errors
///
/// Returns `SpaceApiError::InvalidTimestamp` if neither form matches.
pub fn parse_iso8601(s: &str) -> Result<DateTime<FixedOffset>, SpaceApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let normalized = match s.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };

    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").map_err(|e| {
        SpaceApiError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        }
    })
}
