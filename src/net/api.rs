//! Typed session operations over the gateway.
//!
//! Side-effect contract: `login` persists the returned pair before handing it
//! back, `register` never touches credential storage, and `logout` only
//! clears storage. Reactive state transitions live in `state::session`, not
//! here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiError, ApiRequest, Gateway, Transport};
use super::tokens::TokenStore;
use super::types::{LoginCredentials, RegisterData, TokenPair, User};

pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const ME_PATH: &str = "/api/v1/users/me";

/// Session service: the four auth operations plus the credential predicate.
#[derive(Clone, Copy, Debug)]
pub struct AuthApi<T, K> {
    gateway: Gateway<T, K>,
}

impl<T: Transport, K: TokenStore> AuthApi<T, K> {
    pub fn new(gateway: Gateway<T, K>) -> Self {
        Self { gateway }
    }

    /// Create an account. Leaves credential storage untouched; the caller
    /// still has to log in.
    ///
    /// # Errors
    ///
    /// Returns the gateway error, typically a 4xx carrying the server's
    /// validation `detail`.
    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.gateway.dispatch_json(ApiRequest::post(REGISTER_PATH, body)).await
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// # Errors
    ///
    /// On any error nothing is persisted.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, ApiError> {
        let body =
            serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let pair: TokenPair =
            self.gateway.dispatch_json(ApiRequest::post(LOGIN_PATH, body)).await?;
        self.gateway.tokens().store_pair(&pair);
        Ok(pair)
    }

    /// Drop both stored tokens. Purely local, always succeeds.
    pub fn logout(&self) {
        self.gateway.tokens().clear();
    }

    /// Fetch the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; a 401 here means the session could not be
    /// recovered by a refresh.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.gateway.dispatch_json(ApiRequest::get(ME_PATH)).await
    }

    /// Whether an access token is currently stored. Presence only; the token
    /// may well be expired, which the next request will discover.
    pub fn is_authenticated(&self) -> bool {
        self.gateway.tokens().access().is_some()
    }
}
