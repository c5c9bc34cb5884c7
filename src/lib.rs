//! # ghei-client
//!
//! Leptos + WASM frontend for the housing nonprofit's member portal:
//! public information pages, housing applications, and member-only
//! resources, forum and courses behind an inactivity-limited session.
//!
//! Browser-only behaviour (storage, timers, window listeners, HTTP) sits
//! behind small seams in `util` so the session core and search logic run
//! under plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
