//! Canonical test configurations.

use crate::config::SyncConfig;

/// Sync config with a tiny batch size and a short time budget.
pub fn sync(volume_batch_size: usize, time_limit_ms: i64) -> SyncConfig {
    SyncConfig {
        volume_batch_size,
        time_limit_ms,
        volume_request_timeout_ms: 50,
        ..SyncConfig::default()
    }
}
