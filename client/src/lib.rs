//! # client
//!
//! Leptos + WASM frontend for the MonitorAI attendance and wellness
//! dashboard. Everything shown is demo data or client-side simulation; the
//! host only serves the rendered shell and the compiled bundle.

pub mod app;
pub mod components;
pub mod demo;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
