//! API endpoint configuration.
//!
//! The base URL is baked in at compile time so the WASM bundle needs no
//! runtime configuration fetch. Deployments set `TECHKATTA_API_URL` in the
//! build environment; local development falls back to the dev server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the TechKatta API server, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("TECHKATTA_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join an absolute API path (e.g. `/api/v1/auth/login`) onto the base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
