//! HTTP response types and the status envelope decoder.
//!
//! Every dispatched call ends in [`decode_status`]. Successful responses with
//! a body pass through untouched; empty or failed responses are wrapped in a
//! status envelope:
//!
//! ```json
//! {"status": "not_found", "status_code": 404, "message": "not found"}
//! ```

use serde_json::{Map, Value};

use crate::clients::errors::HttpError;
use crate::json::decode_json;

/// Names for the status codes the Jet API documents.
const STATUS_CODES: [(u16, &str); 11] = [
    (200, "success"),
    (201, "created"),
    (202, "accepted"),
    (204, "no_content"),
    (400, "bad_request"),
    (401, "unauthorized"),
    (403, "forbidden"),
    (404, "not_found"),
    (405, "method_not_allowed"),
    (500, "internal_server_error"),
    (503, "unavailable"),
];

/// Returns the human-readable name of a status code, or `None` for codes
/// outside the documented table.
///
/// ```rust
/// use jet_api::clients::status_name;
///
/// assert_eq!(status_name(204), Some("no_content"));
/// assert_eq!(status_name(418), None);
/// ```
#[must_use]
pub fn status_name(code: u16) -> Option<&'static str> {
    STATUS_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// A response as received from the wire, before decoding.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    #[must_use]
    pub const fn new(code: u16, body: Vec<u8>) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Decodes a response into the value handed back to callers.
///
/// - 2xx with a non-empty body: the decoded JSON body, unmodified.
/// - empty body, or status of 300 and above: `{status, status_code}` merged
///   with the decoded body object. Keys from the body win on collision.
///   `status` is `null` for codes outside the documented table.
///
/// On the envelope path a JSON body that is not an object is kept under
/// `body`, and a body that is not JSON at all is kept as text under
/// `raw_body`.
///
/// # Errors
///
/// Returns [`HttpError::Decode`] if a successful response carries a body that
/// is not valid JSON.
pub fn decode_status(response: &RawResponse) -> Result<Value, HttpError> {
    if !response.is_blank() && response.code < 300 {
        return decode_json(&response.body).map_err(|e| HttpError::Decode {
            status: response.code,
            message: e.to_string(),
        });
    }

    let mut envelope = Map::new();
    envelope.insert(
        "status".to_string(),
        status_name(response.code).map_or(Value::Null, |name| Value::String(name.to_string())),
    );
    envelope.insert("status_code".to_string(), Value::from(response.code));

    match decode_json(&response.body) {
        Ok(Value::Object(body)) => envelope.extend(body),
        Ok(other) => {
            envelope.insert("body".to_string(), other);
        }
        Err(_) => {
            envelope.insert(
                "raw_body".to_string(),
                Value::String(String::from_utf8_lossy(&response.body).into_owned()),
            );
        }
    }

    Ok(Value::Object(envelope))
}
