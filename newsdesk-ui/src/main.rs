//! Newsdesk
//!
//! News reader frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Placeholder login that fills the session slot
//! - News view conditioned on the signed-in user
//! - Topic preferences form with a traced submission
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The domain model lives in the `newsdesk` crate; this crate
//! only wires it to the DOM. There is no backend.

use leptos::*;

mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let loaded = config::load_embedded();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.logging.max_level().ok())
        .unwrap_or(tracing::Level::INFO);
    logging::init(level);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Embedded config rejected, using defaults: {}", e);
        newsdesk::Config::default()
    });
    tracing::info!("Newsdesk v{}", env!("CARGO_PKG_VERSION"));

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
