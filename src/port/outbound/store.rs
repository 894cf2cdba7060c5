//! Persistence ports for the local order and volume mirror.

use async_trait::async_trait;

use crate::domain::{LocalOrder, OrderId, OrderUpdate, VolumeRecord};
use crate::error::Result;

/// Storage operations for locally mirrored orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders that may still change upstream, oldest first, at most `limit`.
    async fn pending_orders(&self, limit: usize) -> Result<Vec<LocalOrder>>;

    /// Apply an update payload. Returns false if the order is unknown.
    async fn apply_update(&self, order_id: &OrderId, update: &OrderUpdate) -> Result<bool>;
}

/// Storage operations for market volumes.
#[async_trait]
pub trait VolumeStore: Send + Sync {
    /// Save volumes, replacing existing entries.
    async fn save_volumes(&self, records: &[VolumeRecord]) -> Result<()>;
}
