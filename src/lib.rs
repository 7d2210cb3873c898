//! # volunteer-console
//!
//! Leptos + WASM browser console for a volunteer-organization REST backend.
//! Volunteers register, log in, and review their participation; admins manage
//! events, attendance, and hour assignments. Navigation is gated by a
//! role-based guard over a localStorage-backed session (see `state::session`
//! and `util::guard`); every authenticated request carries the stored token
//! as a bearer credential (see `net::api`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: initialize logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
