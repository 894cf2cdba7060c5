//! Handlers for the `sync-orders` and `sync-volume` commands.
//!
//! Both run against in-memory stores seeded from the command line and
//! print the run report with the resulting state.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::command::{SyncOrdersArgs, SyncVolumeArgs};
use super::output;
use crate::adapter::outbound::clob::ClobClient;
use crate::adapter::outbound::data::DataApiClient;
use crate::adapter::outbound::store::{MemoryOrderStore, MemoryVolumeStore};
use crate::application::sync::{
    parse_limit_param, OrderSyncJob, OrderSyncReport, VolumeSyncJob, VolumeSyncReport,
};
use crate::config::Config;
use crate::domain::{LocalOrder, MarketId, VolumeRecord};
use crate::error::Result;
use crate::port::outbound::clock::SystemClock;

#[derive(Debug, Serialize)]
struct OrderSyncOutput {
    report: OrderSyncReport,
    orders: Vec<LocalOrder>,
}

pub async fn execute_orders(args: &SyncOrdersArgs, config: &Config) -> Result<()> {
    let raw = std::fs::read_to_string(&args.orders)?;
    let orders: Vec<LocalOrder> = serde_json::from_str(&raw)?;
    let limit = parse_limit_param(
        args.limit.as_deref(),
        config.sync.default_order_limit,
        config.sync.max_order_limit,
    );

    let store = Arc::new(MemoryOrderStore::from_orders(orders));
    let source = Arc::new(ClobClient::from_config(&config.clob)?);
    let job = OrderSyncJob::new(source, store.clone(), Arc::new(SystemClock))
        .with_time_limit(config.sync.time_limit_ms);

    let report = job.run(limit).await?;
    let orders = store.orders();

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&orders)?)?;
        info!(path = %path.display(), "Wrote reconciled orders");
    }

    output::print_json(&OrderSyncOutput { report, orders })
}

#[derive(Debug, Serialize)]
struct VolumeSyncOutput {
    report: VolumeSyncReport,
    volumes: Vec<VolumeRecord>,
}

pub async fn execute_volume(args: &SyncVolumeArgs, config: &Config) -> Result<()> {
    let market_ids: Vec<MarketId> = args
        .markets
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(MarketId::new)
        .collect();

    let store = Arc::new(MemoryVolumeStore::new());
    let source = Arc::new(DataApiClient::from_config(&config.clob)?);
    let job = VolumeSyncJob::new(source, store.clone(), Arc::new(SystemClock))
        .with_config(&config.sync);

    let report = job.run(&market_ids).await;
    output::print_json(&VolumeSyncOutput {
        report,
        volumes: store.records(),
    })
}
