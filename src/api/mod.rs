//! API Layer
//!
//! HTTP client for the scoring API.

pub mod client;

pub use client::*;
