//! State Management
//!
//! Global reactive application state.

pub mod global;

pub use global::{provide_global_state, Complaint, ComplaintStatus, GlobalState, Stats};
