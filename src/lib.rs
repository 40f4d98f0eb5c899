//! # markboard
//!
//! Leptos + WASM bookmarking widget. A URL-keyed bookmark collection lives
//! in browser `localStorage`; a modal form adds validated entries, and the
//! page renders one row per bookmark with a favicon, link, and delete
//! control.
//!
//! This crate contains pages, components, application state, the URL
//! validator, and the browser storage/notification shims.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;

/// WASM entry point: install the panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
