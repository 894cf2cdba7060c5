//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when an entity would
//! violate one of its invariants.
//!
//! # Examples
//!
//! ```
//! use orderdesk::domain::error::DomainError;
//! use orderdesk::domain::market::Market;
//! use orderdesk::domain::id::MarketId;
//!
//! let result = Market::try_new(MarketId::new("0xabc"), "Will it rain?", vec![]);
//!
//! assert!(matches!(result, Err(DomainError::EmptyOutcomes)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Markets must have at least one outcome.
    #[error("outcomes cannot be empty")]
    EmptyOutcomes,

    /// Outcome indices must be `0..n` in order.
    #[error("outcome at position {position} has index {index}")]
    OutcomeIndexMismatch {
        /// Position in the outcome list.
        position: usize,
        /// Index carried by the outcome.
        index: u32,
    },
}
