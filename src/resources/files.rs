//! Bulk file endpoints.
//!
//! Bulk uploads take three steps:
//!
//! 1. [`Files::file_upload_token`] returns a pre-signed blob URL (`url`).
//! 2. [`Files::upload_file`] gzips the file and PUTs it to that URL.
//! 3. [`Files::notify_uploaded_files`] tells Jet to pick it up.
//!
//! [`Files::file_info`] then reports processing status.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;

use crate::clients::HttpError;
use crate::json::Payload;
use crate::resources::segment;
use crate::JetClient;

/// Kinds of bulk file Jet accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    /// SKU definitions.
    MerchantSkus,
    /// Prices.
    Price,
    /// Inventory levels.
    Inventory,
    /// Variation groups.
    Variation,
    /// Archive flags.
    Archive,
}

impl FileType {
    /// Name used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MerchantSkus => "MerchantSKUs",
            Self::Price => "Price",
            Self::Inventory => "Inventory",
            Self::Variation => "Variation",
            Self::Archive => "Archive",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy for `/files` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Files<'a> {
    client: &'a JetClient,
}

impl<'a> Files<'a> {
    pub(crate) const fn new(client: &'a JetClient) -> Self {
        Self { client }
    }

    /// Requests a pre-signed upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn file_upload_token(&self) -> Result<Value, HttpError> {
        self.client
            .rest_get_with_token("/files/uploadToken", None)
            .await
    }

    /// Gzips `contents` and uploads them to a pre-signed blob URL.
    ///
    /// The URL carries its own signature, so no bearer token is sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Io`] if compression fails, otherwise as for any call.
    pub async fn upload_file(&self, url: &str, contents: &[u8]) -> Result<Value, HttpError> {
        let compressed = gzip(contents)?;
        let mut headers = HashMap::new();
        headers.insert("x-ms-blob-type".to_string(), "blockblob".to_string());
        self.client
            .put_unauthenticated(url, &headers, compressed)
            .await
    }

    /// Tells Jet that a file was uploaded and is ready for processing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn notify_uploaded_files(
        &self,
        url: &str,
        file_type: FileType,
        file_name: &str,
    ) -> Result<Value, HttpError> {
        let body: Payload = [
            ("url", url),
            ("file_type", file_type.as_str()),
            ("file_name", file_name),
        ]
        .into_iter()
        .collect();
        self.client.rest_post_with_token("/files/uploaded", body).await
    }

    /// Reports the processing status of an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, authentication or decode failure.
    pub async fn file_info(&self, file_id: &str) -> Result<Value, HttpError> {
        let path = format!("/files/{}", segment(file_id));
        self.client.rest_get_with_token(&path, None).await
    }
}

fn gzip(contents: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(contents)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_gzip_round_trips() {
        let compressed = gzip(br#"{"sku-1":{"price":10}}"#).unwrap();
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

        let mut decoded = String::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, r#"{"sku-1":{"price":10}}"#);
    }

    #[test]
    fn test_file_type_names() {
        assert_eq!(FileType::MerchantSkus.to_string(), "MerchantSKUs");
        assert_eq!(FileType::Inventory.as_str(), "Inventory");
    }
}
