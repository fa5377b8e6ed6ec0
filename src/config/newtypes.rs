//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Jet API user.
///
/// # Example
///
/// ```rust
/// use jet_api::ApiUser;
///
/// let user = ApiUser::new("my-api-user").unwrap();
/// assert_eq!(user.as_ref(), "my-api-user");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUser(String);

impl ApiUser {
    /// Creates a new validated API user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUser`] if the user is empty.
    pub fn new(user: impl Into<String>) -> Result<Self, ConfigError> {
        let user = user.into();
        if user.trim().is_empty() {
            return Err(ConfigError::EmptyApiUser);
        }
        Ok(Self(user))
    }
}

impl AsRef<str> for ApiUser {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Jet API secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use jet_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated Jet merchant id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerchantId(String);

impl MerchantId {
    /// Creates a new validated merchant id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMerchantId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyMerchantId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for MerchantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API base URL.
///
/// The URL must use `http` or `https` and name a host. A trailing `/` is
/// dropped so that request paths (which start with `/`) can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use jet_api::ApiUrl;
///
/// let url = ApiUrl::new("https://merchant-api.jet.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://merchant-api.jet.com/api");
/// assert!(ApiUrl::new("merchant-api.jet.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let valid = url.split_once("://").is_some_and(|(scheme, rest)| {
            // Host ends at port, path, query, or end of string
            let host = rest.split([':', '/', '?', '#']).next().unwrap_or_default();
            matches!(scheme, "http" | "https") && !host.is_empty()
        });

        if valid {
            Ok(Self(url))
        } else {
            Err(ConfigError::InvalidApiUrl { url })
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
