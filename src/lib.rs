//! Orderdesk - order validation, pricing and CLOB sync for prediction markets.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Markets, outcomes, order forms, micro-unit money and the
//!   pure sanitizer and pricing functions
//! - **`application`** - The order validator and the order/volume sync jobs
//! - **`port`** - Inbound result types and outbound traits (order source,
//!   volume source, stores, clock)
//! - **`adapter`** - CLOB and data API clients, in-memory stores, and the CLI
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use orderdesk::application::validation::{OrderContext, OrderValidator};
//!
//! let result = OrderValidator::default().validate(&OrderContext::default(), Utc::now());
//! assert!(!result.is_accepted());
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
