//! HTTP-specific error types for the Jet API client.
//!
//! # Error Handling
//!
//! API-level failures (any response with a status code of 300 or above) are
//! **not** errors: they come back as a decoded status envelope carrying
//! `status` and `status_code`. The types here cover the true failures:
//!
//! - [`HttpError::Network`]: connection or transport failure, including during the token fetch
//! - [`HttpError::Authentication`]: the token endpoint rejected the credentials or replied with garbage
//! - [`HttpError::Codec`]: a request body could not be encoded
//! - [`HttpError::Decode`]: a successful response carried a body that is not JSON
//! - [`HttpError::InvalidRequest`]: a request failed validation before sending
//!
//! # Example
//!
//! ```rust,ignore
//! use jet_api::clients::HttpError;
//!
//! match client.orders().directed_cancel().await {
//!     Ok(body) if body["status_code"].is_u64() => println!("API error: {body}"),
//!     Ok(body) => println!("Orders: {body}"),
//!     Err(HttpError::Authentication { status, message }) => {
//!         println!("Token request failed with {status}: {message}");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::json::CodecError;

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT or POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// An absolute URL outside the configured API base was given as a path.
    #[error("Refusing to send an authenticated request to '{url}': it is not under the API base URL.")]
    ForeignUrl {
        /// The rejected URL.
        url: String,
    },
}

/// Unified error type for all HTTP-related failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The token endpoint did not issue a usable token.
    #[error("Authentication failed (status {status}): {message}")]
    Authentication {
        /// HTTP status of the token response.
        status: u16,
        /// Response body or parse failure description.
        message: String,
    },

    /// A successful response carried a body that could not be decoded.
    #[error("Failed to decode response (status {status}): {message}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// Parse failure description.
        message: String,
    },

    /// Local I/O failure, e.g. while compressing an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_foreign_url_error_names_the_url() {
        let error = InvalidHttpRequestError::ForeignUrl {
            url: "https://elsewhere.example/steal".to_string(),
        };
        assert!(error.to_string().contains("https://elsewhere.example/steal"));
    }

    #[test]
    fn test_authentication_error_includes_status_and_message() {
        let error = HttpError::Authentication {
            status: 401,
            message: r#"{"Message":"Authorization has been denied"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Authorization has been denied"));
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let error = HttpError::from(CodecError::InvalidInput {
            kind: "Number",
            value: "1".to_string(),
        });
        assert!(error.to_string().starts_with("json data must be"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _: &dyn std::error::Error = &HttpError::Decode {
            status: 200,
            message: "test".to_string(),
        };
    }
}
