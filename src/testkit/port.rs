//! Mock outbound port implementations for testing.
//!
//! - [`ScriptedOrderSource`] - Serves remote snapshots from a map; IDs in
//!   the failure set return an error. Each fetch can advance a [`ManualClock`].
//! - [`ScriptedVolumeSource`] - Pops one scripted response per batch.
//! - [`FailingStore`] - Every call fails.
//! - [`ManualClock`] - Time moves only when told to.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use crate::domain::{LocalOrder, MarketId, OrderId, OrderUpdate, RemoteOrder, VolumeRecord};
use crate::error::{Error, Result};
use crate::port::outbound::clock::Clock;
use crate::port::outbound::data::{RawVolume, VolumeSource};
use crate::port::outbound::order::OrderSource;
use crate::port::outbound::store::{OrderStore, VolumeStore};

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// A clock that only moves when [`advance`](Self::advance) is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Arc<Self> {
        Arc::new(Self {
            now_ms: AtomicI64::new(start_ms),
        })
    }

    pub fn advance(&self, ms: i64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_ms.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }

    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// ScriptedOrderSource
// ---------------------------------------------------------------------------

/// Order source backed by a fixed map of snapshots.
#[derive(Default)]
pub struct ScriptedOrderSource {
    orders: HashMap<OrderId, RemoteOrder>,
    failing: HashSet<OrderId>,
    clock: Option<(Arc<ManualClock>, i64)>,
    fetches: AtomicUsize,
}

impl ScriptedOrderSource {
    pub fn new(orders: impl IntoIterator<Item = RemoteOrder>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id.clone(), o)).collect(),
            ..Self::default()
        }
    }

    /// Make fetches of `id` fail.
    #[must_use]
    pub fn failing(mut self, id: &str) -> Self {
        self.failing.insert(OrderId::new(id));
        self
    }

    /// Advance `clock` by `step_ms` on every fetch.
    #[must_use]
    pub fn advancing(mut self, clock: Arc<ManualClock>, step_ms: i64) -> Self {
        self.clock = Some((clock, step_ms));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderSource for ScriptedOrderSource {
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<RemoteOrder>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some((clock, step_ms)) = &self.clock {
            clock.advance(*step_ms);
        }
        if self.failing.contains(order_id) {
            return Err(Error::Store(format!("scripted failure for {order_id}")));
        }
        Ok(self.orders.get(order_id).cloned())
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

// ---------------------------------------------------------------------------
// ScriptedVolumeSource
// ---------------------------------------------------------------------------

/// One scripted response of [`ScriptedVolumeSource`].
pub enum VolumeReply {
    /// Echo every requested market with this volume.
    Volume(serde_json::Value),
    Fail,
    /// Sleep before answering.
    Hang(Duration),
}

/// Volume source popping one reply per batch; exhausted means empty.
#[derive(Default)]
pub struct ScriptedVolumeSource {
    replies: Mutex<VecDeque<VolumeReply>>,
    requests: Mutex<Vec<Vec<MarketId>>>,
}

impl ScriptedVolumeSource {
    pub fn new(replies: impl IntoIterator<Item = VolumeReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The batches requested so far.
    pub fn requests(&self) -> Vec<Vec<MarketId>> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl VolumeSource for ScriptedVolumeSource {
    async fn fetch_volumes(&self, market_ids: &[MarketId]) -> Result<Vec<RawVolume>> {
        self.requests.lock().push(market_ids.to_vec());
        let reply = self.replies.lock().pop_front();
        let volume = match reply {
            Some(VolumeReply::Volume(volume)) => volume,
            Some(VolumeReply::Fail) => return Err(Error::Store("scripted failure".into())),
            Some(VolumeReply::Hang(delay)) => {
                tokio::time::sleep(delay).await;
                serde_json::Value::Null
            }
            None => return Ok(Vec::new()),
        };
        Ok(market_ids
            .iter()
            .map(|id| RawVolume {
                market_id: id.clone(),
                volume: volume.clone(),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// FailingStore
// ---------------------------------------------------------------------------

/// A store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl OrderStore for FailingStore {
    async fn pending_orders(&self, _limit: usize) -> Result<Vec<LocalOrder>> {
        Err(Error::Store("store unavailable".into()))
    }

    async fn apply_update(&self, _order_id: &OrderId, _update: &OrderUpdate) -> Result<bool> {
        Err(Error::Store("store unavailable".into()))
    }
}

#[async_trait]
impl VolumeStore for FailingStore {
    async fn save_volumes(&self, _records: &[VolumeRecord]) -> Result<()> {
        Err(Error::Store("store unavailable".into()))
    }
}
