//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`]: the `orderdesk` command-line interface
//! - [`outbound`]: CLOB and data API clients, in-memory stores

pub mod inbound;
pub mod outbound;
