//! Configuration types for the Jet API client.
//!
//! # Overview
//!
//! - [`JetConfig`]: The credentials and endpoint settings for a client
//! - [`JetConfigBuilder`]: A builder for constructing [`JetConfig`] instances
//! - [`ApiUser`], [`ApiSecret`], [`MerchantId`]: Validated credential newtypes
//! - [`ApiUrl`]: A validated API base URL
//!
//! Credentials are always supplied by the caller. Nothing is read from files
//! or the environment.
//!
//! # Example
//!
//! ```rust
//! use jet_api::{JetConfig, ApiUser, ApiSecret, MerchantId};
//!
//! let config = JetConfig::builder()
//!     .api_user(ApiUser::new("my-api-user").unwrap())
//!     .secret(ApiSecret::new("my-secret").unwrap())
//!     .merchant_id(MerchantId::new("my-merchant").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url().as_ref(), "https://merchant-api.jet.com/api");
//! ```

mod newtypes;

pub use newtypes::{ApiSecret, ApiUrl, ApiUser, MerchantId};

use crate::error::ConfigError;

/// Production base URL of the Jet merchant API.
pub const DEFAULT_API_URL: &str = "https://merchant-api.jet.com/api";

/// Configuration for a [`JetClient`](crate::JetClient).
///
/// `JetConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct JetConfig {
    api_user: ApiUser,
    secret: ApiSecret,
    merchant_id: MerchantId,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl JetConfig {
    /// Creates a new builder for constructing a `JetConfig`.
    #[must_use]
    pub fn builder() -> JetConfigBuilder {
        JetConfigBuilder::new()
    }

    /// Returns the API user.
    #[must_use]
    pub const fn api_user(&self) -> &ApiUser {
        &self.api_user
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn secret(&self) -> &ApiSecret {
        &self.secret
    }

    /// Returns the merchant id.
    #[must_use]
    pub const fn merchant_id(&self) -> &MerchantId {
        &self.merchant_id
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify JetConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JetConfig>();
};

/// Builder for constructing [`JetConfig`] instances.
///
/// Required fields are `api_user`, `secret` and `merchant_id`.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct JetConfigBuilder {
    api_user: Option<ApiUser>,
    secret: Option<ApiSecret>,
    merchant_id: Option<MerchantId>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl JetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API user (required).
    #[must_use]
    pub fn api_user(mut self, user: ApiUser) -> Self {
        self.api_user = Some(user);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn secret(mut self, secret: ApiSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the merchant id (required).
    #[must_use]
    pub fn merchant_id(mut self, id: MerchantId) -> Self {
        self.merchant_id = Some(id);
        self
    }

    /// Overrides the API base URL, e.g. to point at a sandbox.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`JetConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_user`, `secret`
    /// or `merchant_id` are not set.
    pub fn build(self) -> Result<JetConfig, ConfigError> {
        let api_user = self
            .api_user
            .ok_or(ConfigError::MissingRequiredField { field: "api_user" })?;
        let secret = self
            .secret
            .ok_or(ConfigError::MissingRequiredField { field: "secret" })?;
        let merchant_id = self
            .merchant_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "merchant_id",
            })?;
        let api_url = match self.api_url {
            Some(url) => url,
            None => ApiUrl::new(DEFAULT_API_URL)?,
        };

        Ok(JetConfig {
            api_user,
            secret,
            merchant_id,
            api_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> JetConfigBuilder {
        JetConfig::builder()
            .api_user(ApiUser::new("user").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .merchant_id(MerchantId::new("merchant").unwrap())
    }

    #[test]
    fn test_builder_requires_api_user() {
        let result = JetConfigBuilder::new()
            .secret(ApiSecret::new("secret").unwrap())
            .merchant_id(MerchantId::new("merchant").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_user" })
        ));
    }

    #[test]
    fn test_builder_requires_secret() {
        let result = JetConfigBuilder::new()
            .api_user(ApiUser::new("user").unwrap())
            .merchant_id(MerchantId::new("merchant").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "secret" })
        ));
    }

    #[test]
    fn test_builder_requires_merchant_id() {
        let result = JetConfigBuilder::new()
            .api_user(ApiUser::new("user").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "merchant_id"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = full_builder().build().unwrap();

        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.merchant_id().as_ref(), "merchant");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = full_builder()
            .api_url(ApiUrl::new("http://localhost:9000/api").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), "http://localhost:9000/api");
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_secret() {
        let config = full_builder().build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("JetConfig"));
        assert!(!debug_str.contains("\"secret\""));
        assert!(debug_str.contains("ApiSecret(*****)"));
    }
}
