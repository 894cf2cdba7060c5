//! Market data API adapter.

pub mod client;

pub use client::DataApiClient;
