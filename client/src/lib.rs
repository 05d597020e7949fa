//! # client
//!
//! Leptos + WASM frontend for the Learnora landing page.
//!
//! Sections render from the static [`content`] catalog. The two interactive
//! behaviors, the overlay navigation menu and scroll reveal, are state
//! machines in the `motion` crate; [`util`] binds them to the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
