//! Flotilla — fleet-management client for the workshop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos client crate. The session/authorization core lives in `state`,
//! `net`, and `util`; `components` and `pages` consume it exclusively
//! through the `RequireRoles` guard and the role query helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
