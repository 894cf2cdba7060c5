//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`validation`]: order validation result type

pub mod validation;
