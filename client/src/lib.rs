//! # client
//!
//! Leptos + WASM frontend for the Strikers Yard turf-booking site.
//!
//! This crate contains the app shell, pages, components, sign-in state, the
//! REST client for the OTP endpoints and the session store. The root package
//! renders it on the server; the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating strikers yard client");
    leptos::mount::hydrate_body(app::App);
}
