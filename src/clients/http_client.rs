//! The Jet API client and its request dispatcher.
//!
//! This module provides the [`JetClient`] type, which holds the credentials,
//! caches the bearer token, and sends authenticated requests.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::auth::{Token, TokenManager};
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{decode_status, RawResponse};
use crate::config::{JetConfig, MerchantId};
use crate::json::{encode_json, Payload};
use crate::resources::{Files, Orders, Products, Refunds, Returns, Taxonomy};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the Jet merchant API.
///
/// The client handles:
/// - Fetching and caching the bearer token
/// - Default headers including User-Agent and Accept
/// - JSON encoding of request bodies with Jet date formatting
/// - Decoding every response, failed ones included, into a JSON value
///
/// HTTP failures (status 300 and above) are returned as a status envelope,
/// not as errors. Check `status_code` in the returned value.
///
/// # Thread Safety
///
/// `JetClient` is `Send + Sync`. Concurrent calls share one token; a refresh
/// triggered by several callers at once results in a single token request.
///
/// # Example
///
/// ```rust,ignore
/// use jet_api::{JetClient, JetConfig, ApiUser, ApiSecret, MerchantId};
///
/// let config = JetConfig::builder()
///     .api_user(ApiUser::new("api-user").unwrap())
///     .secret(ApiSecret::new("secret").unwrap())
///     .merchant_id(MerchantId::new("merchant").unwrap())
///     .build()
///     .unwrap();
///
/// let client = JetClient::new(config)?;
/// let ready = client.orders().orders(OrderStatus::Ready, None).await?;
/// ```
#[derive(Debug)]
pub struct JetClient {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Credentials and endpoint settings.
    config: JetConfig,
    /// Bearer token cache.
    tokens: TokenManager,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify JetClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JetClient>();
};

impl JetClient {
    /// Creates a new client.
    ///
    /// No request is made until the first API call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: JetConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Jet API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let http = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            http,
            config,
            tokens: TokenManager::new(),
            default_headers,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &JetConfig {
        &self.config
    }

    /// Returns the merchant id.
    #[must_use]
    pub const fn merchant_id(&self) -> &MerchantId {
        self.config.merchant_id()
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.api_url().as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the `Authorization` header pair, fetching a token if needed.
    ///
    /// # Errors
    ///
    /// See [`TokenManager::auth_header`].
    pub async fn auth_header(&self) -> Result<(String, String), HttpError> {
        let headers = merge_headers(&self.default_headers, None)?;
        self.tokens
            .auth_header(&self.http, &self.config, &headers)
            .await
    }

    /// Returns a copy of the currently cached token, if any.
    pub async fn token(&self) -> Option<Token> {
        self.tokens.current().await
    }

    /// Drops the cached token so the next call fetches a new one.
    pub async fn invalidate_token(&self) {
        self.tokens.invalidate().await;
    }

    /// Sends an authenticated request and decodes the response.
    ///
    /// Headers are layered as: client defaults, then `Authorization`, then
    /// `Content-Type` for requests with a body, then the request's
    /// `extra_headers`. Later layers win; names compare case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails, or the path is an absolute URL outside the
    ///   API base URL (`InvalidRequest`)
    /// - The body cannot be encoded (`Codec`)
    /// - No token can be obtained (`Authentication`, `Network`)
    /// - The request cannot be sent (`Network`)
    /// - A 2xx body is not JSON (`Decode`)
    pub async fn api_call_with_token(&self, request: HttpRequest) -> Result<Value, HttpError> {
        request.verify()?;
        let url = self.resolve_url(&request.path)?;

        let (auth_name, auth_value) = self.auth_header().await?;

        let mut headers = self.default_headers.clone();
        headers.insert(auth_name, auth_value);

        let body = match &request.body {
            Some(payload) => {
                headers.insert(
                    CONTENT_TYPE.as_str().to_string(),
                    "application/json".to_string(),
                );
                Some(encode_json(payload)?)
            }
            None => None,
        };

        let header_map = merge_headers(&headers, request.extra_headers.as_ref())?;

        tracing::debug!("Dispatching {} {}", request.http_method, request.path);

        let response = self
            .execute(
                request.http_method,
                &url,
                header_map,
                request.query.as_ref(),
                body,
            )
            .await?;

        if !response.is_ok() {
            tracing::warn!(
                "Jet API {} {} returned status {}",
                request.http_method,
                request.path,
                response.code
            );
        }

        decode_status(&response)
    }

    /// Sends an authenticated GET request.
    ///
    /// Query parameters are sent only when present and non-empty.
    ///
    /// # Errors
    ///
    /// See [`JetClient::api_call_with_token`].
    pub async fn rest_get_with_token(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.api_call_with_token(builder.build()?).await
    }

    /// Sends an authenticated PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`JetClient::api_call_with_token`].
    pub async fn rest_put_with_token(
        &self,
        path: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .build()?;
        self.api_call_with_token(request).await
    }

    /// Sends an authenticated POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`JetClient::api_call_with_token`].
    pub async fn rest_post_with_token(
        &self,
        path: &str,
        body: impl Into<Payload> + Send,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.api_call_with_token(request).await
    }

    /// Sends a raw PUT without the bearer token, e.g. to a pre-signed upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on transport failure and
    /// [`HttpError::Decode`] if a 2xx body is not JSON.
    pub(crate) async fn put_unauthenticated(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Vec<u8>,
    ) -> Result<Value, HttpError> {
        let header_map = merge_headers(&self.default_headers, Some(headers))?;
        tracing::debug!("Uploading {} bytes", body.len());
        let response = self
            .execute(HttpMethod::Put, url, header_map, None, Some(body))
            .await?;
        decode_status(&response)
    }

    /// Joins `path` onto the base URL.
    ///
    /// An absolute URL is accepted only when it lies under the base URL, so
    /// the bearer token never leaves the configured API host.
    fn resolve_url(&self, path: &str) -> Result<String, InvalidHttpRequestError> {
        let base = self.base_url();
        let relative = if path.starts_with("http://") || path.starts_with("https://") {
            path.strip_prefix(base)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .ok_or_else(|| InvalidHttpRequestError::ForeignUrl {
                    url: path.to_string(),
                })?
        } else {
            path
        };
        if relative.starts_with('/') {
            Ok(format!("{base}{relative}"))
        } else {
            Ok(format!("{base}/{relative}"))
        }
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: HeaderMap,
        query: Option<&HashMap<String, String>>,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, HttpError> {
        let mut req_builder = self
            .http
            .request(method.as_reqwest(), url)
            .headers(headers);

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        Ok(RawResponse::new(code, body))
    }
}

impl JetClient {
    /// Order operations.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    /// Return operations.
    #[must_use]
    pub const fn returns(&self) -> Returns<'_> {
        Returns::new(self)
    }

    /// Merchant SKU operations.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Taxonomy lookups.
    #[must_use]
    pub const fn taxonomy(&self) -> Taxonomy<'_> {
        Taxonomy::new(self)
    }

    /// Bulk file operations.
    #[must_use]
    pub const fn files(&self) -> Files<'_> {
        Files::new(self)
    }

    /// Refund operations.
    #[must_use]
    pub const fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }
}

/// Layers `overrides` on top of `base`. Header names are case-insensitive, so
/// an override replaces a base header regardless of spelling.
fn merge_headers(
    base: &HashMap<String, String>,
    overrides: Option<&HashMap<String, String>>,
) -> Result<HeaderMap, InvalidHttpRequestError> {
    let mut map = HeaderMap::new();
    for (key, value) in base.iter().chain(overrides.into_iter().flatten()) {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| InvalidHttpRequestError::InvalidHeader { name: key.clone() })?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| InvalidHttpRequestError::InvalidHeader { name: key.clone() })?;
        map.insert(name, value);
    }
    if !map.contains_key(ACCEPT) {
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiSecret, ApiUrl, ApiUser};

    fn create_test_client(api_url: &str, prefix: Option<&str>) -> JetClient {
        let mut builder = JetConfig::builder()
            .api_user(ApiUser::new("user").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .merchant_id(MerchantId::new("merchant-1").unwrap())
            .api_url(ApiUrl::new(api_url).unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        JetClient::new(builder.build().unwrap()).unwrap()
    }

    #[test]
    fn test_client_exposes_configuration() {
        let client = create_test_client("https://merchant-api.jet.com/api", None);
        assert_eq!(client.base_url(), "https://merchant-api.jet.com/api");
        assert_eq!(client.merchant_id().as_ref(), "merchant-1");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client("https://merchant-api.jet.com/api", None);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Jet API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = create_test_client("https://merchant-api.jet.com/api", Some("MyShop/1.0"));
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
    }

    #[test]
    fn test_resolve_url_joins_relative_paths() {
        let client = create_test_client("https://merchant-api.jet.com/api", None);
        assert_eq!(
            client.resolve_url("/orders/ready").unwrap(),
            "https://merchant-api.jet.com/api/orders/ready"
        );
        assert_eq!(
            client.resolve_url("orders/ready").unwrap(),
            "https://merchant-api.jet.com/api/orders/ready"
        );
    }

    #[test]
    fn test_resolve_url_accepts_absolute_urls_under_base() {
        let client = create_test_client("https://merchant-api.jet.com/api", None);
        assert_eq!(
            client
                .resolve_url("https://merchant-api.jet.com/api/orders/withoutShipmentDetail/o-1")
                .unwrap(),
            "https://merchant-api.jet.com/api/orders/withoutShipmentDetail/o-1"
        );
    }

    #[test]
    fn test_resolve_url_rejects_other_hosts() {
        let client = create_test_client("https://merchant-api.jet.com/api", None);
        for url in [
            "https://blob.example.net/upload?sig=1",
            "https://merchant-api.jet.com/apix/orders",
            "https://merchant-api.jet.com.evil.example/api/orders",
            "http://merchant-api.jet.com/api/orders",
        ] {
            assert!(
                matches!(
                    client.resolve_url(url),
                    Err(InvalidHttpRequestError::ForeignUrl { .. })
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_merge_headers_override_wins_case_insensitively() {
        let mut base = HashMap::new();
        base.insert("Authorization".to_string(), "Bearer abc".to_string());
        let mut overrides = HashMap::new();
        overrides.insert("authorization".to_string(), "Custom xyz".to_string());

        let merged = merge_headers(&base, Some(&overrides)).unwrap();
        assert_eq!(merged.get_all("authorization").iter().count(), 1);
        assert_eq!(merged.get("Authorization").unwrap(), "Custom xyz");
        assert_eq!(merged.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_merge_headers_rejects_invalid_names() {
        let mut base = HashMap::new();
        base.insert("Bad Header".to_string(), "x".to_string());
        assert!(matches!(
            merge_headers(&base, None),
            Err(InvalidHttpRequestError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JetClient>();
    }
}
