//! Lazy fetching and caching of the bearer token.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tokio::sync::Mutex;

use crate::auth::token::{Token, TokenResponse};
use crate::clients::HttpError;
use crate::config::JetConfig;
use crate::json::{encode_json, Payload};

/// Name of the header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Holds the current token and refreshes it when it is missing or expired.
///
/// The check-fetch-store sequence runs under one lock, so concurrent callers
/// that all see an expired token trigger a single fetch and share its result.
///
/// # Example
///
/// ```rust,ignore
/// let manager = TokenManager::new();
/// let (name, value) = manager.auth_header(&http, &config, &headers).await?;
/// assert_eq!(name, "Authorization");
/// ```
#[derive(Debug, Default)]
pub struct TokenManager {
    cached: Mutex<Option<Token>>,
}

impl TokenManager {
    /// Creates a manager with no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `Authorization` header pair, fetching a token first if
    /// none is held or the held one has expired.
    ///
    /// `headers` are sent with the token request, so it carries the same
    /// `User-Agent` and `Accept` as API calls.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] if the token endpoint cannot be reached
    /// - [`HttpError::Authentication`] if it answers with a non-2xx status or
    ///   a body that does not contain a usable token
    pub async fn auth_header(
        &self,
        http: &reqwest::Client,
        config: &JetConfig,
        headers: &HeaderMap,
    ) -> Result<(String, String), HttpError> {
        let mut cached = self.cached.lock().await;

        // An expired token is discarded here even if the refetch fails.
        let token = match cached.take() {
            Some(token) if !token.expired() => token,
            _ => {
                let fresh = fetch_token(http, config, headers).await?;
                tracing::debug!(
                    "Fetched new {} token expiring at {}",
                    fresh.token_type,
                    fresh.expires_on
                );
                fresh
            }
        };

        let value = token.authorization();
        *cached = Some(token);
        Ok((AUTHORIZATION.to_string(), value))
    }

    /// Returns a copy of the cached token, if any.
    pub async fn current(&self) -> Option<Token> {
        self.cached.lock().await.clone()
    }

    /// Drops the cached token so the next call fetches a new one.
    pub async fn invalidate(&self) {
        self.cached.lock().await.take();
    }
}

async fn fetch_token(
    http: &reqwest::Client,
    config: &JetConfig,
    headers: &HeaderMap,
) -> Result<Token, HttpError> {
    let url = format!("{}/token", config.api_url().as_ref());

    let credentials: Payload = [
        ("user", config.api_user().as_ref()),
        ("pass", config.secret().as_ref()),
    ]
    .into_iter()
    .collect();
    let body = encode_json(&credentials)?;

    let mut headers = headers.clone();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let response = http.post(&url).headers(headers).body(body).send().await?;

    let status = response.status().as_u16();
    let text = response.text().await?;

    if !(200..300).contains(&status) {
        tracing::warn!("Token request rejected with status {}", status);
        return Err(HttpError::Authentication {
            status,
            message: text,
        });
    }

    let parsed: TokenResponse =
        serde_json::from_str(&text).map_err(|e| HttpError::Authentication {
            status,
            message: format!("Failed to parse token response: {e}"),
        })?;

    Token::from_response(parsed).map_err(|message| HttpError::Authentication { status, message })
}

// Verify TokenManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenManager>();
};
