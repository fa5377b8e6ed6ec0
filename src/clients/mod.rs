//! HTTP client types for Jet merchant API communication.
//!
//! This module provides the transport layer: building requests, attaching
//! the bearer token, encoding bodies, and turning every response into a JSON
//! value.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`JetClient`]: The async client holding credentials and the token cache
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`RawResponse`]: Status, headers and body of a completed call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`decode_status`]: Converts a [`RawResponse`] into a JSON value
//!
//! # Example
//!
//! ```rust,ignore
//! use jet_api::{HttpMethod, HttpRequest, JetClient};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/orders/ready")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let value = client.api_call_with_token(request).await?;
//! ```
//!
//! # Failed Responses
//!
//! A response with status 300 or above is not an error. It is decoded into
//! an envelope object carrying `status` (the reason phrase) and
//! `status_code`, merged with the JSON body when there is one.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{JetClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{decode_status, status_name, RawResponse};
