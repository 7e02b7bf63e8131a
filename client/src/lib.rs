//! # client
//!
//! Leptos + WASM frontend for the point-of-sale portal's sign-in screens.
//!
//! This crate contains the login and forgot-password pages, the session probe
//! that runs when the login screen mounts, the role-based landing router, and
//! the REST client for the external `/auth/*` API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
