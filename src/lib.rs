//! # admin-console
//!
//! Leptos + WASM interaction layer for the admin panel: the AI assistant chat,
//! assistant status and logs, image generation, the user deletion flow, and
//! the shared AI query client.
//!
//! ARCHITECTURE
//! ============
//! `net` owns the HTTP contract, `state` holds per-component view models,
//! `services` run one user action each against injected host capabilities,
//! and `components`/`pages` render state through Leptos. Browser-only glue is
//! gated behind the `csr` feature so everything else stays testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install console logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
