//! API Module
//!
//! Browser client for the workout API.

mod client;

pub use client::*;
