//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the matching engine, the market data API, the
//! local order/volume mirror and the wall clock.

pub mod clock;
pub mod data;
pub mod order;
pub mod store;
