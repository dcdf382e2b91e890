//! Pages
//!
//! Top-level page components for each route.

pub mod analyze;
pub mod chat;
pub mod tickets;

pub use analyze::Analyze;
pub use chat::Chat;
pub use tickets::Tickets;
