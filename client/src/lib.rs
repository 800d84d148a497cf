//! # client
//!
//! Leptos + WASM front-end for Parkwatch: draws named parking areas over a
//! camera stream, lets the user define new ones with two clicks, and colors
//! each area busy or free from the area service's occupancy reports.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
