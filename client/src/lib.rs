//! # portfolio-client
//!
//! Leptos + WASM frontend for the portfolio site: tabbed sections,
//! collapsible info panels, a comment board and a map of comment locations.
//!
//! Page state lives in `state`, every user operation in `controller`, and
//! the HTTP client for the comment backend in `net`. Components render from
//! state and call into the controller.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
