//! Hourglass
//!
//! House points scoreboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Public dashboard with per-house point gauges and a point-change log
//! - Token-based sign-in persisted across reloads
//! - Admin console for awarding points to one student or a whole CSV of them
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the scoring API over HTTP; the dashboard
//! polls, the admin console writes.

use leptos::*;

mod api;
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
