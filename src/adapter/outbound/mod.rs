//! Outbound adapters (driven side).

pub mod clob;
pub mod data;
pub mod store;
