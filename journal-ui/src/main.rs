//! Workout Journal
//!
//! Single-page workout log built with Leptos (WASM).
//!
//! # Features
//!
//! - Create sessions and pick one of the latest ten
//! - Add sets (weight, reps, note) and delete them
//! - Volume chart ordered by set sequence
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state and its transitions come from the
//! `workout-journal` library; this crate only wires them to the DOM and to
//! the workout API over fetch.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
