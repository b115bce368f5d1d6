//! # client
//!
//! Leptos + WASM frontend for the Acadvizen learning platform console.
//!
//! This crate contains the router, route guards, pages, presentational
//! widgets, and the browser bindings (`gloo-net` transport, `localStorage`
//! session persistence) that plug the `portal` domain core into the page.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
