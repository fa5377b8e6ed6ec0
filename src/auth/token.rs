//! Bearer tokens issued by the Jet token endpoint.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Response from `POST /token`.
///
/// ```json
/// {"id_token": "eyJ0eXAi...", "token_type": "Bearer", "expires_on": "2016-05-12T18:55:53Z"}
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    /// Opaque token value.
    pub id_token: String,
    /// Token type, used as the `Authorization` scheme.
    pub token_type: String,
    /// Absolute expiry timestamp.
    pub expires_on: String,
}

/// A cached bearer token.
///
/// The `Debug` implementation masks the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// Token type, e.g. `Bearer`.
    pub token_type: String,
    /// Opaque token value.
    pub id_token: String,
    /// When the token stops being valid.
    pub expires_on: DateTime<Utc>,
}

impl Token {
    /// Builds a token from the endpoint response.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if `expires_on` cannot be parsed.
    pub fn from_response(response: TokenResponse) -> Result<Self, String> {
        let expires_on = parse_expires_on(&response.expires_on)
            .ok_or_else(|| format!("Unparseable expires_on '{}'", response.expires_on))?;
        Ok(Self {
            token_type: response.token_type,
            id_token: response.id_token,
            expires_on,
        })
    }

    /// Returns `true` once the expiry timestamp is at or before `now`.
    #[must_use]
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_on <= now
    }

    /// Returns `true` if the token has expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    /// Returns the `Authorization` header value: `"<type> <token>"`.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.id_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("id_token", &"*****")
            .field("expires_on", &self.expires_on)
            .finish()
    }
}

/// Parses an `expires_on` timestamp.
///
/// Accepts RFC 3339 timestamps and offset-less ISO 8601 timestamps, which are
/// taken as UTC.
#[must_use]
pub fn parse_expires_on(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn token_expiring(expires_on: DateTime<Utc>) -> Token {
        Token {
            token_type: "Bearer".to_string(),
            id_token: "abc123".to_string(),
            expires_on,
        }
    }

    #[test]
    fn test_parse_expires_on_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2016, 5, 12, 18, 55, 53).unwrap();
        assert_eq!(parse_expires_on("2016-05-12T18:55:53Z"), Some(expected));
        assert_eq!(parse_expires_on("2016-05-12T18:55:53+00:00"), Some(expected));
        assert_eq!(parse_expires_on("2016-05-12T11:55:53-07:00"), Some(expected));
    }

    #[test]
    fn test_parse_expires_on_without_offset_is_utc() {
        let expected = Utc.with_ymd_and_hms(2016, 5, 12, 18, 55, 53).unwrap();
        assert_eq!(parse_expires_on("2016-05-12T18:55:53"), Some(expected));
        assert_eq!(parse_expires_on("2016-05-12T18:55:53.000"), Some(expected));
    }

    #[test]
    fn test_parse_expires_on_rejects_garbage() {
        assert_eq!(parse_expires_on("tomorrow"), None);
        assert_eq!(parse_expires_on(""), None);
    }

    #[test]
    fn test_token_from_response() {
        let token = Token::from_response(TokenResponse {
            id_token: "abc123".to_string(),
            token_type: "Bearer".to_string(),
            expires_on: "2030-01-01T00:00:00Z".to_string(),
        })
        .unwrap();
        assert_eq!(token.authorization(), "Bearer abc123");
        assert!(!token.expired());
    }

    #[test]
    fn test_token_from_response_with_bad_expiry() {
        let result = Token::from_response(TokenResponse {
            id_token: "abc123".to_string(),
            token_type: "Bearer".to_string(),
            expires_on: "never".to_string(),
        });
        assert!(result.unwrap_err().contains("never"));
    }

    #[test]
    fn test_token_expires_at_exact_instant() {
        let now = Utc::now();
        assert!(token_expiring(now).expired_at(now));
        assert!(token_expiring(now - Duration::seconds(1)).expired_at(now));
        assert!(!token_expiring(now + Duration::seconds(1)).expired_at(now));
    }

    #[test]
    fn test_token_debug_masks_value() {
        let debug = format!("{:?}", token_expiring(Utc::now()));
        assert!(debug.contains("Bearer"));
        assert!(!debug.contains("abc123"));
    }
}
