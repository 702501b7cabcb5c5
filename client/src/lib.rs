//! # tourdesk-client
//!
//! Leptos + WASM admin dashboard for tour providers: sign in, manage the
//! provider's tours (with image uploads to the hosted image API), and review
//! bookings.
//!
//! This crate contains pages, components, application state, and the REST
//! client. It builds with `hydrate` for the browser bundle and with `ssr`
//! when linked into `tourdesk-server`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
