//! # Error Types
//!
//! Errors raised by the typed document model. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Structural validation failures are not errors of this crate: they are
//! reported as violation lists by `spaceapi-schema`. The variants here
//! cover conversions the typed model performs on already-decoded values.

use thiserror::Error;

/// Top-level error type for the SpaceAPI document model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpaceApiError {
    /// A string is not a member of a controlled vocabulary.
    #[error("'{value}' is not a valid {vocabulary}; expected one of: {allowed}")]
    UnknownVariant {
        /// Name of the vocabulary (e.g. `TemperatureUnit`).
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted literals.
        allowed: String,
    },

    /// A timestamp string is not ISO 8601 with a timezone designator.
    #[error("invalid ISO 8601 timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A Unix timestamp is outside the representable range.
    #[error("unix timestamp out of range: {0}")]
    TimestampOutOfRange(f64),
}
