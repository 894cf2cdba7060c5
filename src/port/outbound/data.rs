//! Market data port for aggregate volume queries.

use async_trait::async_trait;

use crate::domain::MarketId;
use crate::error::Result;

/// Raw volume entry as returned upstream.
///
/// `volume` is left as JSON because the API reports it either as a number
/// or as a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVolume {
    pub market_id: MarketId,
    pub volume: serde_json::Value,
}

/// Read-only aggregate market data.
#[async_trait]
pub trait VolumeSource: Send + Sync {
    /// Fetch volumes for a batch of markets.
    ///
    /// Markets unknown upstream are omitted from the result.
    async fn fetch_volumes(&self, market_ids: &[MarketId]) -> Result<Vec<RawVolume>>;
}
