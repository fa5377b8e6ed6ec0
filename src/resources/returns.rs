//! Return endpoints.

use std::fmt;

use serde_json::Value;

use crate::clients::HttpError;
use crate::json::Payload;
use crate::resources::segment;
use crate::JetClient;

/// Return states that can be polled via `GET /returns/<status>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReturnStatus {
    /// Opened by the customer.
    #[default]
    Created,
    /// Acknowledged by the merchant.
    Acknowledged,
    /// Being processed.
    InProgress,
    /// Completed by the merchant.
    CompletedByMerchant,
}

impl ReturnStatus {
    /// Path segment for this status, already percent-encoded.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Acknowledged => "acknowledged",
            Self::InProgress => "inprogress",
            Self::CompletedByMerchant => "completed%20by%20merchant",
        }
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy for `/returns` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Returns<'a> {
    client: &'a JetClient,
}

impl<'a> Returns<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    /// Lists return URLs in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn returns(&self, status: ReturnStatus) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&format!("/returns/{status}"), None)
            .await
    }

    /// Fetches a return by the URL returned from [`Returns::returns`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure, and
    /// [`HttpError::InvalidRequest`] if the URL is not under the API base URL.
    pub async fn get_return(&self, return_url: &str) -> Result<Value, HttpError> {
        self.client.rest_get_with_token(return_url, None).await
    }

    /// Acknowledges a return.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn acknowledge_return(
        &self,
        return_id: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("/returns/{}/acknowledge", segment(return_id));
        self.client.rest_put_with_token(&path, body).await
    }

    /// Completes a return, reporting refund amounts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn complete_return(
        &self,
        return_id: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("/returns/{}/complete", segment(return_id));
        self.client.rest_put_with_token(&path, body).await
    }
}
