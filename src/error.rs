//! Error types for the Jet API client.
//!
//! This module contains the configuration and validation errors. HTTP and
//! codec errors live next to the code that produces them, in
//! [`crate::clients`] and [`crate::json`].
//!
//! # Example
//!
//! ```rust
//! use jet_api::{ApiUser, ConfigError};
//!
//! let result = ApiUser::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiUser)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API user cannot be empty.
    #[error("API user cannot be empty. Please provide the API user issued in the Jet partner portal.")]
    EmptyApiUser,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide the API secret issued in the Jet partner portal.")]
    EmptyApiSecret,

    /// Merchant id cannot be empty.
    #[error("Merchant id cannot be empty. Please provide your Jet merchant id.")]
    EmptyMerchantId,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://merchant-api.jet.com/api').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
