//! # Jet Merchant API Rust Client
//!
//! An async Rust client for the Jet merchant REST API, covering orders,
//! returns, products, taxonomy, bulk files, and refunds.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`JetConfig`] and [`JetConfigBuilder`]
//! - Validated newtypes for credentials and the API base URL
//! - Bearer token acquisition and caching, refreshed once expired
//! - A JSON codec that writes timestamps in Jet's date format
//! - Response decoding that reports failed calls as a status envelope
//! - Resource proxies for every merchant endpoint group
//!
//! ## Quick Start
//!
//! ```rust
//! use jet_api::{ApiSecret, ApiUser, JetConfig, MerchantId};
//!
//! let config = JetConfig::builder()
//!     .api_user(ApiUser::new("your-api-user").unwrap())
//!     .secret(ApiSecret::new("your-secret").unwrap())
//!     .merchant_id(MerchantId::new("your-merchant-id").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use jet_api::{JetClient, OrderStatus, Payload};
//!
//! let client = JetClient::new(config)?;
//!
//! // The first call fetches a token; later calls reuse it until it expires.
//! let ready = client.orders().orders(OrderStatus::Ready, None).await?;
//!
//! // Bodies are built from `Payload`, so timestamps keep their offset.
//! let body: Payload = [("price", Payload::from(12.5))].into_iter().collect();
//! let result = client.products().update_price("SKU-1", body).await?;
//!
//! if result["status_code"].as_u64().is_some_and(|code| code >= 300) {
//!     eprintln!("price update failed: {result}");
//! }
//! ```
//!
//! ## Bulk Files
//!
//! ```rust,ignore
//! use jet_api::FileType;
//!
//! let token = client.files().file_upload_token().await?;
//! let url = token["url"].as_str().unwrap_or_default();
//! client.files().upload_file(url, &std::fs::read("prices.json")?).await?;
//! client
//!     .files()
//!     .notify_uploaded_files(url, FileType::Price, "prices.json.gz")
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: [`JetClient`] is `Send + Sync` and shares one token
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod json;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Token;
pub use config::{ApiSecret, ApiUrl, ApiUser, JetConfig, JetConfigBuilder, MerchantId};
pub use error::ConfigError;
pub use json::{CodecError, Payload};

// Re-export HTTP client types
pub use clients::{
    HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, InvalidHttpRequestError, JetClient,
    RawResponse,
};

// Re-export resource proxies
pub use resources::{
    FileType, Files, OrderStatus, Orders, Products, RefundStatus, Refunds, ReturnStatus, Returns,
    Taxonomy,
};
