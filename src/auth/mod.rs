//! Authentication against the Jet token endpoint.
//!
//! Jet issues short-lived bearer tokens from `POST <base>/token` in exchange
//! for the API user and secret. The [`TokenManager`] fetches one lazily on the
//! first call, caches it, and fetches a new one once the cached token's
//! `expires_on` has passed. Every request then carries
//! `Authorization: <token_type> <id_token>`.
//!
//! Tokens are never persisted.

mod token;
mod token_manager;

pub use token::{parse_expires_on, Token, TokenResponse};
pub use token_manager::{TokenManager, AUTHORIZATION};
