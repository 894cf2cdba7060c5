//! In-memory stores for the CLI and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{LocalOrder, MarketId, OrderId, OrderUpdate, VolumeRecord};
use crate::error::Result;
use crate::port::outbound::store::{OrderStore, VolumeStore};

/// Order store keeping insertion order as age order.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<LocalOrder>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, oldest order first.
    pub fn from_orders(orders: Vec<LocalOrder>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Copy of every stored order.
    pub fn orders(&self) -> Vec<LocalOrder> {
        self.orders.read().clone()
    }

    pub fn get(&self, id: &OrderId) -> Option<LocalOrder> {
        self.orders.read().iter().find(|o| &o.id == id).cloned()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn pending_orders(&self, limit: usize) -> Result<Vec<LocalOrder>> {
        Ok(self
            .orders
            .read()
            .iter()
            .filter(|o| !o.status.is_terminal())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn apply_update(&self, order_id: &OrderId, update: &OrderUpdate) -> Result<bool> {
        let mut orders = self.orders.write();
        match orders.iter_mut().find(|o| &o.id == order_id) {
            Some(order) => {
                order.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Volume store keyed by market.
#[derive(Debug, Default)]
pub struct MemoryVolumeStore {
    volumes: RwLock<BTreeMap<MarketId, String>>,
}

impl MemoryVolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, market_id: &MarketId) -> Option<String> {
        self.volumes.read().get(market_id).cloned()
    }

    /// Every stored volume, ordered by market ID.
    pub fn records(&self) -> Vec<VolumeRecord> {
        self.volumes
            .read()
            .iter()
            .map(|(market_id, volume)| VolumeRecord {
                market_id: market_id.clone(),
                volume: volume.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl VolumeStore for MemoryVolumeStore {
    async fn save_volumes(&self, records: &[VolumeRecord]) -> Result<()> {
        let mut volumes = self.volumes.write();
        for record in records {
            volumes.insert(record.market_id.clone(), record.volume.clone());
        }
        Ok(())
    }
}
