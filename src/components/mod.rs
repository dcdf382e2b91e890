//! UI Components
//!
//! Reusable Leptos components for the helpdesk client.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chart::StatusChart;
pub use loading::ListSkeleton;
pub use nav::Nav;
pub use toast::Toast;
