//! # client
//!
//! Leptos + WASM frontend for the single-page portfolio site.
//!
//! This crate contains the page, section components, application state
//! (including the profile store), and the browser-boundary utilities that
//! bind the profile to the address bar and localStorage.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
