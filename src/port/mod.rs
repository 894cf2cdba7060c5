//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Validator + Sync jobs  ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  CLOB   │            │    Store    │              │ Data API  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! - [`inbound`]: result types handed back to drivers (CLI, UI handlers)
//! - [`outbound`]: order/volume sources, stores and the clock

pub mod inbound;
pub mod outbound;
