//! JSON encoding and decoding for Jet API payloads.
//!
//! Jet requires every timestamp in a request body to be rendered as
//! `yyyy-MM-ddTHH:mm:ss.fffffff±HH:MM`, e.g. `2009-06-15T13:45:30.0000000-07:00`.
//! The encoder walks the whole [`Payload`] tree and renders each
//! [`Payload::DateTime`] it finds in that format.
//!
//! Decoding is plain JSON parsing into [`serde_json::Value`]. Dates come back
//! as strings; there is no reverse transform.
//!
//! # Example
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use jet_api::json::{encode_json, Payload};
//!
//! let at = FixedOffset::west_opt(7 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
//!     .unwrap();
//! let body: Payload = [("shipped_at", at)].into_iter().collect();
//!
//! let bytes = encode_json(&body).unwrap();
//! assert_eq!(
//!     String::from_utf8(bytes).unwrap(),
//!     r#"{"shipped_at":"2024-01-02T03:04:05.0000000-07:00"}"#
//! );
//! ```

mod payload;

pub use payload::Payload;

use chrono::{DateTime, TimeZone};
use serde_json::Value;
use thiserror::Error;

/// `strftime` pattern for Jet timestamps: microseconds padded with a literal
/// `0` to seven fractional digits, then the `±HH:MM` offset.
const JET_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f0%:z";

/// Errors produced by the JSON codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The top-level value was neither an object nor an array.
    #[error("json data must be an Object or Array. Received {kind} : {value}")]
    InvalidInput {
        /// Variant name of the rejected value.
        kind: &'static str,
        /// Rendering of the rejected value.
        value: String,
    },

    /// The normalized value could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input was not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Renders a timestamp in the Jet wire format.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use jet_api::json::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2015, 8, 4, 20, 56, 13).unwrap();
/// assert_eq!(format_timestamp(&at), "2015-08-04T20:56:13.0000000+00:00");
/// ```
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.format(JET_DATE_FORMAT).to_string()
}

/// Converts a payload into a [`serde_json::Value`], rendering every timestamp
/// at any depth in the Jet wire format.
///
/// # Errors
///
/// Returns [`CodecError::InvalidInput`] if the top-level payload is not an
/// object or an array.
pub fn format_dates(data: &Payload) -> Result<Value, CodecError> {
    if !data.is_container() {
        return Err(CodecError::InvalidInput {
            kind: data.kind(),
            value: data.to_string(),
        });
    }
    Ok(normalize(data))
}

fn normalize(data: &Payload) -> Value {
    match data {
        Payload::Null => Value::Null,
        Payload::Bool(b) => Value::Bool(*b),
        Payload::Number(n) => Value::Number(n.clone()),
        Payload::String(s) => Value::String(s.clone()),
        Payload::DateTime(dt) => Value::String(format_timestamp(dt)),
        Payload::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Payload::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect(),
        ),
    }
}

/// Encodes a payload as UTF-8 JSON bytes with dates normalized.
///
/// # Errors
///
/// Returns [`CodecError::InvalidInput`] if the top-level payload is not an
/// object or an array, or [`CodecError::Serialize`] if serialization fails.
pub fn encode_json(data: &Payload) -> Result<Vec<u8>, CodecError> {
    let normalized = format_dates(data)?;
    serde_json::to_vec(&normalized).map_err(CodecError::Serialize)
}

/// Decodes JSON text.
///
/// Empty (or whitespace-only) input decodes to an empty object.
///
/// # Errors
///
/// Returns [`CodecError::Deserialize`] if the input is not valid JSON.
pub fn decode_json(json: &[u8]) -> Result<Value, CodecError> {
    if json.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(json).map_err(CodecError::Deserialize)
}
