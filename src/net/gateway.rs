//! Authenticated HTTP gateway with transparent token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call flows through `Gateway::dispatch`, which attaches the
//! bearer header and hides access-token expiry from callers: a 401 triggers
//! one refresh attempt and one replay of the original request. A failed
//! refresh ends the session (both slots cleared, hard redirect to `/login`).
//!
//! ERROR HANDLING
//! ==============
//! Callers get an `ApiError` taxonomy instead of raw transport errors so UI
//! code can branch on status and surface the server's `detail` message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::tokens::TokenStore;
use super::types::TokenPair;

/// Path of the unauthenticated token refresh endpoint.
pub const REFRESH_PATH: &str = "/api/v1/auth/refresh";

/// HTTP methods the API surface actually uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request in flight through the gateway.
///
/// `retried` travels with the request itself, so the once-only replay
/// guarantee holds per request rather than globally.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute API path, e.g. `/api/v1/users/me`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Access token attached by the gateway; `None` sends unauthenticated.
    pub bearer: Option<String>,
    /// Whether this request has already been replayed after a refresh.
    pub retried: bool,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_owned(), body: None, bearer: None, retried: false }
    }

    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_owned(),
            body: Some(body),
            bearer: None,
            retried: false,
        }
    }
}

/// A completed HTTP exchange: status plus the decoded JSON body.
///
/// Bodies that fail to parse as JSON are represented as `Value::Null`;
/// status-code handling never depends on the body being well-formed.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors surfaced by the gateway and the typed API layer above it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A response body did not match the expected shape.
    #[error("codec error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided `detail` message, when one exists.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Transport seam under the gateway.
///
/// The real implementation speaks `gloo-net`; tests substitute a scripted
/// in-memory transport.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Map a non-success response to `ApiError::Status`, lifting the server's
/// `detail` field out of the body when present.
fn status_error(resp: &ApiResponse) -> ApiError {
    let detail = resp.body.get("detail").and_then(serde_json::Value::as_str).map(str::to_owned);
    ApiError::Status { status: resp.status, detail }
}

/// Bearer-injecting gateway owning the refresh-and-retry protocol.
#[derive(Clone, Copy, Debug)]
pub struct Gateway<T, K> {
    transport: T,
    tokens: K,
}

impl<T: Transport, K: TokenStore> Gateway<T, K> {
    pub fn new(transport: T, tokens: K) -> Self {
        Self { transport, tokens }
    }

    /// Credential store backing this gateway.
    pub fn tokens(&self) -> &K {
        &self.tokens
    }

    /// Send a request, refreshing credentials once on a 401.
    ///
    /// # Errors
    ///
    /// Propagates transport errors, non-success statuses, and refresh
    /// failures. After a failed refresh both token slots are cleared and the
    /// browser is redirected to `/login` before the error is returned.
    pub async fn dispatch(&self, mut req: ApiRequest) -> Result<ApiResponse, ApiError> {
        loop {
            // Re-read the slot each attempt: the replay must carry the
            // freshly refreshed token, not the expired one.
            req.bearer = self.tokens.access();
            let resp = self.transport.send(&req).await?;
            if resp.is_success() {
                return Ok(resp);
            }
            if resp.status == 401 && !req.retried {
                req.retried = true;
                let Some(refresh) = self.tokens.refresh() else {
                    return Err(status_error(&resp));
                };
                match self.refresh_pair(&refresh).await {
                    Ok(pair) => {
                        self.tokens.store_pair(&pair);
                        continue;
                    }
                    Err(err) => {
                        self.tokens.clear();
                        crate::util::auth::force_login_redirect();
                        return Err(err);
                    }
                }
            }
            return Err(status_error(&resp));
        }
    }

    /// Send a request and decode the success body as `D`.
    ///
    /// # Errors
    ///
    /// Everything `dispatch` returns, plus `ApiError::Decode` when the body
    /// does not match `D`.
    pub async fn dispatch_json<D: DeserializeOwned>(&self, req: ApiRequest) -> Result<D, ApiError> {
        let resp = self.dispatch(req).await?;
        serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange the refresh token for a new pair.
    ///
    /// Sent unauthenticated and marked `retried` so the exchange itself can
    /// never recurse into another refresh.
    async fn refresh_pair(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        let mut req =
            ApiRequest::post(REFRESH_PATH, serde_json::json!({ "refresh_token": refresh_token }));
        req.retried = true;
        let resp = self.transport.send(&req).await?;
        if !resp.is_success() {
            return Err(status_error(&resp));
        }
        serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Real browser transport over `gloo-net`.
///
/// Client-side (hydrate): real HTTP calls against the configured API base.
/// Server-side (SSR): fails with a transport error since session traffic is
/// only meaningful in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = super::config::api_url(&req.path);
            let builder = match req.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            };
            let builder = match &req.bearer {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            };
            let pending = match &req.body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let resp = pending.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body =
                resp.json::<serde_json::Value>().await.unwrap_or(serde_json::Value::Null);
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
