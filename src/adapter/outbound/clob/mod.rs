//! CLOB matching engine adapter.

pub mod auth;
pub mod client;
pub mod dto;

pub use client::ClobClient;
