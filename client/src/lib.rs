//! Single-page smart-board client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side Leptos application: reactive board state drives a live DOM
//! view, while the export pipeline redraws the same state through the `board`
//! engine crate at 4K and downloads the result. Browser-only code sits behind
//! the `hydrate` feature so the whole crate tests natively.

pub mod app;
pub mod components;
pub mod export;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console_log already initialized".into());
    }
    leptos::mount::mount_to_body(app::App);
}
