//! HydroWatch Site
//!
//! Showcase page and demo dashboard for water-treatment monitoring, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Product story loaded from the data API
//! - Energy, water quality and plant status charts, drawn on canvas the
//!   first time they scroll into view
//! - Light/dark theme remembered in local storage
//! - Slide-in contact panel
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reuses the `hydrowatch` crate (without its native
//! feature) for the data model, chart configuration and lazy renderer.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
