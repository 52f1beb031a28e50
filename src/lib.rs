//! # activity-board
//!
//! Leptos + WASM frontend for an activity signup board. Lists activities
//! from the Activity API, signs students up, and unregisters participants.
//!
//! The `csr` feature builds the browser bundle; without it every browser
//! call degrades to a stub so the crate builds and tests natively.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    log::debug!("mounting activity board");
    leptos::mount::mount_to_body(app::App);
}
