//! # portfolio
//!
//! Single-page personal portfolio rendered with Leptos and WebAssembly.
//!
//! The decidable parts of the page live in [`state`] as plain functions over
//! plain data and are tested natively:
//!
//! | Module | Role |
//! |--------|------|
//! | [`state::contact`] | Contact form validation and accepted submissions |
//! | [`state::scroll`] | Scroll sample to active section / header / button state |
//! | [`state::theme`] | Light/dark preference over a [`util::storage::KeyValueStore`] |
//! | [`state::nav`] | Mobile menu state and keyboard shortcuts |
//! | [`state::reveal`] | Sticky fade-in of cards scrolled into view |
//!
//! [`app`], [`pages`], and [`components`] are the view layer. Browser access
//! is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the page.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    log::info!("portfolio starting");
    leptos::mount::mount_to_body(app::App);
}
