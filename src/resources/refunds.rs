//! Refund endpoints.

use std::fmt;

use serde_json::Value;

use crate::clients::HttpError;
use crate::json::Payload;
use crate::resources::segment;
use crate::JetClient;

/// Refund states that can be polled via `GET /refunds/<status>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefundStatus {
    /// Requested, not yet processed.
    #[default]
    Created,
    /// Being processed.
    Processing,
    /// Accepted by Jet.
    Accepted,
    /// Rejected by Jet.
    Rejected,
}

impl RefundStatus {
    /// Path segment for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Processing => "processing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy for `/refunds` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Refunds<'a> {
    client: &'a JetClient,
}

impl<'a> Refunds<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    /// Starts a refund for an order. `alt_refund_id` is the merchant's own
    /// refund reference.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn create_merchant_initiated_refund(
        &self,
        order_id: &str,
        alt_refund_id: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("/refunds/{}/{}", segment(order_id), segment(alt_refund_id));
        self.client.rest_post_with_token(&path, body).await
    }

    /// Checks the state of a refund.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn check_refund_state(
        &self,
        refund_authorization_id: &str,
    ) -> Result<Value, HttpError> {
        let path = format!("/refunds/state/{}", segment(refund_authorization_id));
        self.client.rest_get_with_token(&path, None).await
    }

    /// Lists refunds in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn refunds(&self, status: RefundStatus) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&format!("/refunds/{status}"), None)
            .await
    }
}
