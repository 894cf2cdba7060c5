//! Order and volume sync jobs against scripted ports.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use orderdesk::adapter::outbound::store::{MemoryOrderStore, MemoryVolumeStore};
use orderdesk::application::sync::{OrderSyncJob, VolumeSyncJob};
use orderdesk::domain::{MarketId, OrderId, OrderStatus};
use orderdesk::testkit::config;
use orderdesk::testkit::domain::{local_order, market_ids, remote_order};
use orderdesk::testkit::port::{
    FailingStore, ManualClock, ScriptedOrderSource, ScriptedVolumeSource, VolumeReply,
};

fn order_job(
    source: ScriptedOrderSource,
    store: Arc<MemoryOrderStore>,
    clock: Arc<ManualClock>,
) -> OrderSyncJob {
    OrderSyncJob::new(Arc::new(source), store, clock)
}

#[tokio::test]
async fn order_sync_updates_terminal_orders_and_skips_live() {
    let store = Arc::new(MemoryOrderStore::from_orders(vec![
        local_order("a", OrderStatus::Live),
        local_order("b", OrderStatus::Live),
        local_order("c", OrderStatus::Delayed),
    ]));
    let source = ScriptedOrderSource::new([
        remote_order("a", OrderStatus::Matched, "12.5"),
        remote_order("b", OrderStatus::Live, "1"),
        remote_order("c", OrderStatus::Cancelled, "0.1234567"),
    ]);
    let job = order_job(source, store.clone(), ManualClock::new(0));

    let report = job.run(10).await.unwrap();
    assert_eq!(report.scanned, 3);
    assert_eq!(report.updated, 2);
    assert_eq!(report.skipped_live, 1);
    assert!(!report.timed_out);

    let a = store.get(&OrderId::new("a")).unwrap();
    assert_eq!(a.status, OrderStatus::Matched);
    assert_eq!(a.size_matched_micro.as_deref(), Some("12500000"));

    let b = store.get(&OrderId::new("b")).unwrap();
    assert_eq!(b.status, OrderStatus::Live);
    assert_eq!(b.size_matched_micro, None);

    let c = store.get(&OrderId::new("c")).unwrap();
    assert_eq!(c.size_matched_micro.as_deref(), Some("123456"));
}

#[tokio::test]
async fn order_sync_continues_past_a_failed_fetch() {
    let store = Arc::new(MemoryOrderStore::from_orders(vec![
        local_order("a", OrderStatus::Live),
        local_order("b", OrderStatus::Live),
        local_order("c", OrderStatus::Live),
    ]));
    let source = ScriptedOrderSource::new([
        remote_order("a", OrderStatus::Matched, "1"),
        remote_order("c", OrderStatus::Matched, "2"),
    ])
    .failing("a");
    let job = order_job(source, store.clone(), ManualClock::new(0));

    let report = job.run(10).await.unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(report.missing, 1);
    assert_eq!(report.updated, 1);
    assert_eq!(
        store.get(&OrderId::new("c")).unwrap().size_matched_micro.as_deref(),
        Some("2000000")
    );
}

#[tokio::test]
async fn order_sync_stops_when_time_budget_is_spent() {
    let clock = ManualClock::new(1_000);
    let store = Arc::new(MemoryOrderStore::from_orders(
        (0..5).map(|i| local_order(&format!("o{i}"), OrderStatus::Live)).collect(),
    ));
    let source = Arc::new(
        ScriptedOrderSource::new(
            (0..5).map(|i| remote_order(&format!("o{i}"), OrderStatus::Matched, "1")),
        )
        .advancing(clock.clone(), 100),
    );
    let job = OrderSyncJob::new(source.clone(), store.clone(), clock).with_time_limit(250);

    let report = job.run(10).await.unwrap();
    assert!(report.timed_out);
    assert_eq!(source.fetch_count(), 3);
    assert_eq!(report.updated, 3);
    assert_eq!(store.get(&OrderId::new("o3")).unwrap().status, OrderStatus::Live);
}

#[tokio::test]
async fn order_resync_is_idempotent() {
    let store = Arc::new(MemoryOrderStore::from_orders(vec![local_order(
        "a",
        OrderStatus::Delayed,
    )]));
    let remote = || remote_order("a", OrderStatus::Unmatched, "3");

    let clock = ManualClock::new(0);

    let first = order_job(ScriptedOrderSource::new([remote()]), store.clone(), clock.clone());
    first.run(10).await.unwrap();
    let after_first = store.orders();

    let second = order_job(ScriptedOrderSource::new([remote()]), store.clone(), clock);
    let report = second.run(10).await.unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(store.orders(), after_first);
}

#[tokio::test]
async fn order_sync_respects_limit() {
    let store = Arc::new(MemoryOrderStore::from_orders(
        (0..4).map(|i| local_order(&format!("o{i}"), OrderStatus::Live)).collect(),
    ));
    let source = Arc::new(ScriptedOrderSource::new([]));
    let job = OrderSyncJob::new(source.clone(), store, ManualClock::new(0));

    let report = job.run(2).await.unwrap();
    assert_eq!(report.scanned, 2);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn order_sync_fails_when_store_is_unreadable() {
    let job = OrderSyncJob::new(
        Arc::new(ScriptedOrderSource::new([])),
        Arc::new(FailingStore),
        ManualClock::new(0),
    );
    assert!(job.run(10).await.is_err());
}

#[tokio::test]
async fn volume_sync_batches_and_normalizes() {
    let source = Arc::new(ScriptedVolumeSource::new([
        VolumeReply::Volume(json!("1234.50")),
        VolumeReply::Volume(json!(77)),
        VolumeReply::Volume(json!(null)),
    ]));
    let store = Arc::new(MemoryVolumeStore::new());
    let job = VolumeSyncJob::new(source.clone(), store.clone(), ManualClock::new(0))
        .with_config(&config::sync(2, 60_000));

    let report = job.run(&market_ids(5)).await;
    assert_eq!(report.batches, 3);
    assert_eq!(report.saved, 5);
    assert_eq!(report.failed_batches, 0);

    let sizes: Vec<usize> = source.requests().iter().map(Vec::len).collect();
    assert_eq!(sizes, [2, 2, 1]);
    assert_eq!(store.get(&MarketId::new("m0")).as_deref(), Some("1234.50"));
    assert_eq!(store.get(&MarketId::new("m3")).as_deref(), Some("77"));
    assert_eq!(store.get(&MarketId::new("m4")).as_deref(), Some("0"));
}

#[tokio::test]
async fn volume_sync_skips_failed_and_timed_out_batches() {
    let source = Arc::new(ScriptedVolumeSource::new([
        VolumeReply::Fail,
        VolumeReply::Hang(Duration::from_secs(5)),
        VolumeReply::Volume(json!(5)),
    ]));
    let store = Arc::new(MemoryVolumeStore::new());
    let job = VolumeSyncJob::new(source, store.clone(), ManualClock::new(0))
        .with_config(&config::sync(1, 60_000));

    let report = job.run(&market_ids(3)).await;
    assert_eq!(report.failed_batches, 2);
    assert_eq!(report.saved, 1);
    assert_eq!(store.get(&MarketId::new("m2")).as_deref(), Some("5"));
    assert_eq!(store.get(&MarketId::new("m0")), None);
}

#[tokio::test]
async fn volume_sync_reports_store_failures() {
    let source = Arc::new(ScriptedVolumeSource::new([VolumeReply::Volume(json!(1))]));
    let job = VolumeSyncJob::new(source, Arc::new(FailingStore), ManualClock::new(0));

    let report = job.run(&market_ids(1)).await;
    assert_eq!(report.failed_batches, 1);
    assert_eq!(report.saved, 0);
}

#[tokio::test]
async fn volume_sync_with_no_markets_does_nothing() {
    let source = Arc::new(ScriptedVolumeSource::new([]));
    let store = Arc::new(MemoryVolumeStore::new());
    let job = VolumeSyncJob::new(source.clone(), store, ManualClock::new(0));

    let report = job.run(&[]).await;
    assert_eq!(report.batches, 0);
    assert!(source.requests().is_empty());
}
