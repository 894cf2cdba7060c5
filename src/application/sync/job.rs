//! Batch jobs that mirror matching engine state locally.
//!
//! Both jobs check the wall-clock budget before each remote call and
//! return early once it is spent. A failure on one order or one batch is
//! logged and counted; the rest of the run continues.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::order::{evaluate_order_sync_decision, OrderSyncDecision};
use super::params::{chunk_volume_work, has_reached_time_limit};
use super::volume::normalize_volumes;
use crate::config::{
    SyncConfig, SYNC_TIME_LIMIT_MS, VOLUME_BATCH_SIZE, VOLUME_REQUEST_TIMEOUT_MS,
};
use crate::domain::MarketId;
use crate::error::Result;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::data::VolumeSource;
use crate::port::outbound::order::OrderSource;
use crate::port::outbound::store::{OrderStore, VolumeStore};

/// Counters from one order sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSyncReport {
    /// Local orders read from the store.
    pub scanned: usize,
    pub updated: usize,
    pub skipped_live: usize,
    /// Unknown to the engine or no longer in the store.
    pub missing: usize,
    pub failed: usize,
    /// The run stopped before reaching every scanned order.
    pub timed_out: bool,
}

/// Reconciles pending local orders with the matching engine.
pub struct OrderSyncJob {
    source: Arc<dyn OrderSource>,
    store: Arc<dyn OrderStore>,
    clock: Arc<dyn Clock>,
    time_limit_ms: i64,
}

impl OrderSyncJob {
    pub fn new(
        source: Arc<dyn OrderSource>,
        store: Arc<dyn OrderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            time_limit_ms: SYNC_TIME_LIMIT_MS,
        }
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit_ms: i64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Sync up to `limit` pending orders.
    ///
    /// # Errors
    ///
    /// Fails only if the pending orders cannot be read from the store.
    pub async fn run(&self, limit: usize) -> Result<OrderSyncReport> {
        let started_at = self.clock.now_ms();
        let orders = self.store.pending_orders(limit).await?;

        let mut report = OrderSyncReport {
            scanned: orders.len(),
            ..OrderSyncReport::default()
        };
        info!(
            pending = orders.len(),
            limit,
            source = self.source.source_name(),
            "Starting order sync"
        );

        for order in &orders {
            if has_reached_time_limit(started_at, self.clock.now_ms(), self.time_limit_ms) {
                let processed =
                    report.updated + report.skipped_live + report.missing + report.failed;
                warn!(
                    processed,
                    scanned = report.scanned,
                    "Order sync time budget reached, stopping early"
                );
                report.timed_out = true;
                break;
            }

            let remote = match self.source.fetch_order(&order.id).await {
                Ok(Some(remote)) => remote,
                Ok(None) => {
                    warn!(order_id = %order.id, "Order not found on matching engine");
                    report.missing += 1;
                    continue;
                }
                Err(e) => {
                    warn!(order_id = %order.id, error = %e, "Failed to fetch order");
                    report.failed += 1;
                    continue;
                }
            };

            let decision =
                evaluate_order_sync_decision(&remote, order.size_matched_micro.as_deref());
            let update = match decision {
                OrderSyncDecision::SkipLive => {
                    debug!(order_id = %order.id, "Order still live, skipping");
                    report.skipped_live += 1;
                    continue;
                }
                OrderSyncDecision::Update(update) => update,
            };

            match self.store.apply_update(&order.id, &update).await {
                Ok(true) => {
                    debug!(
                        order_id = %order.id,
                        status = %update.status,
                        size_changed = update.size_matched.is_some(),
                        "Order updated"
                    );
                    report.updated += 1;
                }
                Ok(false) => {
                    warn!(order_id = %order.id, "Order vanished from store during sync");
                    report.missing += 1;
                }
                Err(e) => {
                    warn!(order_id = %order.id, error = %e, "Failed to write order update");
                    report.failed += 1;
                }
            }
        }

        info!(
            updated = report.updated,
            skipped_live = report.skipped_live,
            missing = report.missing,
            failed = report.failed,
            timed_out = report.timed_out,
            "Order sync finished"
        );
        Ok(report)
    }
}

/// Counters from one volume sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VolumeSyncReport {
    pub batches: usize,
    pub saved: usize,
    pub failed_batches: usize,
    pub timed_out: bool,
}

/// Refreshes market volumes from the data API in fixed-size batches.
pub struct VolumeSyncJob {
    source: Arc<dyn VolumeSource>,
    store: Arc<dyn VolumeStore>,
    clock: Arc<dyn Clock>,
    batch_size: usize,
    request_timeout: Duration,
    time_limit_ms: i64,
}

impl VolumeSyncJob {
    pub fn new(
        source: Arc<dyn VolumeSource>,
        store: Arc<dyn VolumeStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            batch_size: VOLUME_BATCH_SIZE,
            request_timeout: Duration::from_millis(VOLUME_REQUEST_TIMEOUT_MS),
            time_limit_ms: SYNC_TIME_LIMIT_MS,
        }
    }

    /// Apply batch size, request timeout and time budget from config.
    #[must_use]
    pub fn with_config(mut self, config: &SyncConfig) -> Self {
        self.batch_size = config.volume_batch_size;
        self.request_timeout = Duration::from_millis(config.volume_request_timeout_ms);
        self.time_limit_ms = config.time_limit_ms;
        self
    }

    pub async fn run(&self, market_ids: &[MarketId]) -> VolumeSyncReport {
        let started_at = self.clock.now_ms();
        let batches = chunk_volume_work(market_ids, self.batch_size);
        let mut report = VolumeSyncReport {
            batches: batches.len(),
            ..VolumeSyncReport::default()
        };
        info!(
            markets = market_ids.len(),
            batches = batches.len(),
            "Starting volume sync"
        );

        for (index, batch) in batches.iter().enumerate() {
            if has_reached_time_limit(started_at, self.clock.now_ms(), self.time_limit_ms) {
                warn!(batch = index, "Volume sync time budget reached, stopping early");
                report.timed_out = true;
                break;
            }

            let fetch = self.source.fetch_volumes(batch);
            let raw = match tokio::time::timeout(self.request_timeout, fetch).await {
                Ok(Ok(raw)) => raw,
                Ok(Err(e)) => {
                    warn!(batch = index, error = %e, "Failed to fetch volumes");
                    report.failed_batches += 1;
                    continue;
                }
                Err(_) => {
                    warn!(
                        batch = index,
                        timeout_ms = self.request_timeout.as_millis() as u64,
                        "Volume request timed out"
                    );
                    report.failed_batches += 1;
                    continue;
                }
            };

            let records = normalize_volumes(&raw);
            match self.store.save_volumes(&records).await {
                Ok(()) => report.saved += records.len(),
                Err(e) => {
                    warn!(batch = index, error = %e, "Failed to save volumes");
                    report.failed_batches += 1;
                }
            }
        }

        info!(
            saved = report.saved,
            failed_batches = report.failed_batches,
            timed_out = report.timed_out,
            "Volume sync finished"
        );
        report
    }
}
