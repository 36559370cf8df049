//! # techkatta-client
//!
//! Leptos + WASM frontend for the TechKatta student community platform.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the
//! authenticated HTTP gateway used to talk to the TechKatta REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
