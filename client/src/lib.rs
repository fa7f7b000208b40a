//! # clientiq
//!
//! Leptos front end for the ClientIQ back-office app. Pages are gated by a
//! placeholder sign-in backed by a session record in `localStorage`.
//!
//! The crate builds twice: `hydrate` produces the browser bundle and `ssr`
//! lets the server render the same components.

#![recursion_limit = "256"]

pub mod app;
pub mod auth;
pub mod components;
pub mod consts;
pub mod forms;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
