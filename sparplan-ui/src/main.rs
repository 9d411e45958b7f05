//! Sparplan Frontend
//!
//! ETF savings-plan calculator built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Validation, the ETF catalogue and the route paths come from the
//! `sparplan` core crate so the browser and the host server agree on them.
//!
//! Build with `trunk build --release`; test with
//! `wasm-pack test --headless --firefox`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
