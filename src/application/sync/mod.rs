//! Reconciliation of the local order and volume mirror with the matching
//! engine and the market data API.
//!
//! The helpers never fail: malformed upstream data is absorbed into a safe
//! default and logged, so one bad record cannot abort a batch.

mod job;
mod order;
mod params;
mod volume;

pub use job::{OrderSyncJob, OrderSyncReport, VolumeSyncJob, VolumeSyncReport};
pub use order::{convert_size_matched_to_micro, evaluate_order_sync_decision, OrderSyncDecision};
pub use params::{
    chunk_volume_work, has_reached_sync_time_limit, has_reached_time_limit, parse_limit_param,
    parse_order_sync_limit,
};
pub use volume::{normalize_volume_str, normalize_volume_value, normalize_volumes};
