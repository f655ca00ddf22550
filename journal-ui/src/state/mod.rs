//! State Management
//!
//! Global page state and the actions that drive it.

pub mod global;

pub use global::{provide_global_state, use_global_state, GlobalState};
