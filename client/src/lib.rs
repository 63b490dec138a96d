//! # landing
//!
//! Leptos + WASM frontend for the Labees fashion-marketplace landing site.
//!
//! This crate contains the page-session view state (menu, theme, language,
//! scroll treatment), the localized copy, the navbar/hero/footer components,
//! and the route-level pages. The `labees` binary renders it server-side; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod copy;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attaches the client runtime to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    log::info!("hydrating landing app");
    leptos::mount::hydrate_body(app::App);
}
