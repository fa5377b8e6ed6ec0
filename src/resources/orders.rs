//! Order endpoints.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::HttpError;
use crate::json::Payload;
use crate::resources::segment;
use crate::JetClient;

/// Order states that can be polled via `GET /orders/<status>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Placed, not yet released to the merchant.
    Created,
    /// Ready to be acknowledged.
    #[default]
    Ready,
    /// Acknowledged by the merchant.
    Acknowledged,
    /// Partially shipped.
    InProgress,
    /// Fully shipped or cancelled.
    Complete,
}

impl OrderStatus {
    /// Path segment for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Ready => "ready",
            Self::Acknowledged => "acknowledged",
            Self::InProgress => "inprogress",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy for `/orders` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Orders<'a> {
    client: &'a JetClient,
}

impl<'a> Orders<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    /// Lists order URLs in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn orders(
        &self,
        status: OrderStatus,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&format!("/orders/{status}"), query)
            .await
    }

    /// Lists orders Jet has asked the merchant to cancel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn directed_cancel(&self) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token("/orders/directedCancel", None)
            .await
    }

    /// Fetches an order by the URL returned from [`Orders::orders`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure, and
    /// [`HttpError::InvalidRequest`] if the URL is not under the API base URL.
    pub async fn get_order(&self, order_url: &str) -> Result<Value, HttpError> {
        self.client.rest_get_with_token(order_url, None).await
    }

    /// Fetches an order by its Jet id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_order_by_id(&self, order_id: &str) -> Result<Value, HttpError> {
        let path = format!("/orders/withoutShipmentDetail/{}", segment(order_id));
        self.client.rest_get_with_token(&path, None).await
    }

    /// Accepts or rejects an order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn acknowledge_order(
        &self,
        order_id: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("/orders/{}/acknowledge", segment(order_id));
        self.client.rest_put_with_token(&path, body).await
    }

    /// Reports shipments for an order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn ship_order(
        &self,
        order_id: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("/orders/{}/shipped", segment(order_id));
        self.client.rest_put_with_token(&path, body).await
    }

    /// Attaches a free-form tag to an order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn tag_order(&self, order_id: &str, tag: &str) -> Result<Value, HttpError> {
        let path = format!("/orders/{}/tag", segment(order_id));
        let body: Payload = [("tag", tag)].into_iter().collect();
        self.client.rest_put_with_token(&path, body).await
    }
}
