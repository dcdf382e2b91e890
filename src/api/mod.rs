//! API Layer
//!
//! HTTP communication with the helpdesk service.

pub mod client;

pub use client::*;
