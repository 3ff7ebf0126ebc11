//! # client
//!
//! Leptos + WASM frontend for the Hype Fy dashboard profile screen.
//!
//! This crate contains the page, dialogs, client-side state, form
//! validation, and the REST helpers for the account endpoints. The server
//! crate renders it with the `ssr` feature; the browser bundle is built
//! with `hydrate`.

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
