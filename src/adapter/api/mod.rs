//! Roll-call API Integration
//!
//! リモートAPIとのHTTP通信

pub mod client;
pub mod models;

pub use client::ApiClient;
