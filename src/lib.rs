//! # ecobin-client
//!
//! Leptos + WASM front-end for the EcoBin IoT waste-bin monitoring product:
//! marketing landing page plus the sign-up / sign-in / dashboard auth flow.
//!
//! The engineering core is the dependency-injected session store in
//! [`store`], the single writer of authentication state. Pages and
//! components consume its snapshots through Leptos context; the HTTP client
//! and the durable token slot are injected at the root composition point.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
