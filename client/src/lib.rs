//! # renit-client
//!
//! Leptos + WASM frontend for the Renit item-rental marketplace.
//!
//! This crate contains pages, components, page-local state models, REST and
//! websocket helpers for the remote marketplace API, and small browser
//! utilities. It is rendered on the server by `renit-server` and hydrated in
//! the browser through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
