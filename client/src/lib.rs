//! # client
//!
//! Leptos + WASM front end for Bookshelf Boulevard.
//!
//! This crate contains the route-level pages, the signup form and responsive
//! navigation bar components, their local view state, and the validation
//! rules the signup form enforces. It is rendered on the server by the
//! `server` crate (feature `ssr`) and hydrated in the browser (feature
//! `hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
