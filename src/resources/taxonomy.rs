//! Taxonomy endpoints.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::HttpError;
use crate::resources::segment;
use crate::JetClient;

/// Proxy for `/taxonomy` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Taxonomy<'a> {
    client: &'a JetClient,
}

impl<'a> Taxonomy<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    /// Lists taxonomy node links for a taxonomy version (e.g. `v1`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_nodes(
        &self,
        version: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Value, HttpError> {
        let mut query = HashMap::new();
        query.insert("offset".to_string(), offset.to_string());
        query.insert("limit".to_string(), limit.to_string());
        let path = format!("/taxonomy/links/{}", segment(version));
        self.client.rest_get_with_token(&path, Some(query)).await
    }

    /// Fetches a taxonomy node.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_node_details(&self, node_id: &str) -> Result<Value, HttpError> {
        let path = format!("/taxonomy/nodes/{}", segment(node_id));
        self.client.rest_get_with_token(&path, None).await
    }

    /// Fetches the attributes defined for a taxonomy node.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_node_attributes(&self, node_id: &str) -> Result<Value, HttpError> {
        let path = format!("/taxonomy/nodes/{}/attributes", segment(node_id));
        self.client.rest_get_with_token(&path, None).await
    }
}
