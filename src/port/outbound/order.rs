//! Order snapshot port for the matching engine.

use async_trait::async_trait;

use crate::domain::{OrderId, RemoteOrder};
use crate::error::Result;

/// Read access to orders held by the matching engine.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the current snapshot of an order.
    ///
    /// Returns `Ok(None)` when the engine does not know the order.
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<RemoteOrder>>;

    /// Get the source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
