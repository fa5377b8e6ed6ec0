//! Merchant SKU endpoints.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::HttpError;
use crate::json::Payload;
use crate::resources::segment;
use crate::JetClient;

/// Slot of the main product image. Slots 2 and up are alternate images.
pub const MAIN_IMAGE_SLOT: u32 = 1;

/// Proxy for `/merchant-skus` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Products<'a> {
    client: &'a JetClient,
}

impl<'a> Products<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    fn sku_path(merchant_sku: &str, suffix: &str) -> String {
        format!("/merchant-skus/{}{suffix}", segment(merchant_sku))
    }

    /// Creates or replaces a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_product(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, ""), body)
            .await
    }

    /// Fetches a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_product(&self, merchant_sku: &str) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&Self::sku_path(merchant_sku, ""), None)
            .await
    }

    /// Lists SKU URLs.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn list_products(&self, offset: u32, limit: u32) -> Result<Value, HttpError> {
        let mut query = HashMap::new();
        query.insert("offset".to_string(), offset.to_string());
        query.insert("limit".to_string(), limit.to_string());
        self.client
            .rest_get_with_token("/merchant-skus", Some(query))
            .await
    }

    /// Sets the price of a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_price(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/price"), body)
            .await
    }

    /// Fetches the price of a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_product_price(&self, merchant_sku: &str) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&Self::sku_path(merchant_sku, "/price"), None)
            .await
    }

    /// Sets inventory levels per fulfillment node.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_inventory(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/inventory"), body)
            .await
    }

    /// Fetches inventory levels.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_product_inventory(&self, merchant_sku: &str) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&Self::sku_path(merchant_sku, "/inventory"), None)
            .await
    }

    /// Sets an image. Slot [`MAIN_IMAGE_SLOT`] replaces the main image; any
    /// other slot sets an alternate image.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn add_image(
        &self,
        merchant_sku: &str,
        image_url: &str,
        image_slot: u32,
    ) -> Result<Value, HttpError> {
        let body: Payload = if image_slot == MAIN_IMAGE_SLOT {
            [("main_image_url", image_url)].into_iter().collect()
        } else {
            let alternate: Payload = [
                ("image_slot_id", Payload::from(image_slot)),
                ("image_url", Payload::from(image_url)),
            ]
            .into_iter()
            .collect();
            [("alternate_images", vec![alternate])].into_iter().collect()
        };
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/image"), body)
            .await
    }

    /// Sets shipping exceptions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_shipping_exceptions(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/shippingexception"), body)
            .await
    }

    /// Sets returns exceptions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_returns_exceptions(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/returnsexception"), body)
            .await
    }

    /// Groups a SKU into a variation family.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or encode/decode failure.
    pub async fn update_variation(
        &self,
        merchant_sku: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/variation"), body)
            .await
    }

    /// Archives or unarchives a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn archive_product(
        &self,
        merchant_sku: &str,
        archived: bool,
    ) -> Result<Value, HttpError> {
        let body: Payload = [("is_archived", archived)].into_iter().collect();
        self.client
            .rest_put_with_token(&Self::sku_path(merchant_sku, "/status/archive"), body)
            .await
    }

    /// Fetches competitive sales data for a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn get_product_sales_data(&self, merchant_sku: &str) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token(&Self::sku_path(merchant_sku, "/salesdata"), None)
            .await
    }
}
