//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for markets, sessions and ready-to-submit contexts.
//! - [`port`] - Scripted order/volume sources, a failing store and a manual clock.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod port;
