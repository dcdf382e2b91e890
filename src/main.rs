//! Helpdesk Front End
//!
//! Browser client for the helpdesk service, built with Leptos (WASM).
//!
//! # Features
//!
//! - AI assistant chat with markdown replies
//! - Ticket submission, admin reply, and deletion
//! - Status dashboard with a donut chart
//! - Sentiment analysis of free-form complaint text
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every operation is an HTTP round trip to the helpdesk API
//! followed by a reactive re-render; the client keeps no durable state of its
//! own beyond the latest server snapshot.

use leptos::*;

mod api;
mod app;
mod components;
mod dialog;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
