//! HTTP access to the TechKatta REST API.
//!
//! DESIGN
//! ======
//! `gateway` owns the transport seam plus the bearer/refresh protocol,
//! `tokens` owns credential storage, and `api` exposes the typed session
//! operations the rest of the app calls. Pages never talk to `gloo-net`
//! directly.

pub mod api;
pub mod config;
pub mod gateway;
pub mod tokens;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
