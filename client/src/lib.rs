//! # account-client
//!
//! Leptos + WASM frontend for the WP Shopify customer account login.
//!
//! This crate contains the login page, its presentational components, the
//! form state machine, and the token-endpoint client. Browser globals
//! (query string, `localStorage`, `window.location`) are reached only through
//! the capabilities in `util`, so the login flow runs unchanged in native tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
