//! Reconciling a local order with its matching engine snapshot.

use crate::domain::money::str_to_micro_string;
use crate::domain::{OrderUpdate, RemoteOrder};

/// What to do with a local order after fetching its snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSyncDecision {
    /// The order is still resting on the book; leave the local copy alone.
    SkipLive,
    /// Write these fields back.
    Update(OrderUpdate),
}

/// Convert an engine-reported decimal size to a micro-unit string.
///
/// Unparseable, non-finite or negative input becomes `"0"`. Sizes beyond
/// the `Decimal` range still convert, with `f64` precision.
///
/// ```
/// use orderdesk::application::sync::convert_size_matched_to_micro;
///
/// assert_eq!(convert_size_matched_to_micro("0.000001"), "1");
/// assert_eq!(convert_size_matched_to_micro("abc"), "0");
/// ```
#[must_use]
pub fn convert_size_matched_to_micro(value: &str) -> String {
    str_to_micro_string(value)
}

/// Decide whether `remote` requires a write to the local record.
///
/// Live orders are skipped. Otherwise the status is always written and
/// `size_matched` only when it differs from `local_size_matched_micro`, so
/// re-syncing a reconciled order writes nothing new.
#[must_use]
pub fn evaluate_order_sync_decision(
    remote: &RemoteOrder,
    local_size_matched_micro: Option<&str>,
) -> OrderSyncDecision {
    if remote.status.is_live() {
        return OrderSyncDecision::SkipLive;
    }

    let remote_micro = convert_size_matched_to_micro(&remote.size_matched);
    let unchanged = local_size_matched_micro.is_some_and(|local| local.trim() == remote_micro);

    OrderSyncDecision::Update(OrderUpdate {
        status: remote.status.clone(),
        size_matched: (!unchanged).then_some(remote_micro),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalOrder, OrderId, OrderStatus};

    fn remote(status: OrderStatus, size: &str) -> RemoteOrder {
        RemoteOrder {
            id: OrderId::new("0xorder"),
            status,
            size_matched: size.into(),
        }
    }

    #[test]
    fn micro_conversion_boundaries() {
        assert_eq!(convert_size_matched_to_micro("0.000001"), "1");
        assert_eq!(convert_size_matched_to_micro("abc"), "0");
        assert_eq!(convert_size_matched_to_micro("12.5"), "12500000");
        assert_eq!(convert_size_matched_to_micro("-3"), "0");
        assert_eq!(convert_size_matched_to_micro(""), "0");
        assert_eq!(convert_size_matched_to_micro("0.0000009"), "0");
    }

    #[test]
    fn micro_conversion_handles_sizes_beyond_decimal_scale() {
        assert_eq!(
            convert_size_matched_to_micro("1e23"),
            "100000000000000000000000000000"
        );
        assert_ne!(convert_size_matched_to_micro("1e30"), "0");
        assert_eq!(convert_size_matched_to_micro("inf"), "0");
    }

    #[test]
    fn live_orders_are_always_skipped() {
        let order = remote(OrderStatus::Live, "40");
        for local in [None, Some("0"), Some("40000000"), Some("garbage")] {
            assert_eq!(evaluate_order_sync_decision(&order, local), OrderSyncDecision::SkipLive);
        }
    }

    #[test]
    fn changed_size_is_written() {
        let order = remote(OrderStatus::Matched, "10");
        assert_eq!(
            evaluate_order_sync_decision(&order, Some("4000000")),
            OrderSyncDecision::Update(OrderUpdate {
                status: OrderStatus::Matched,
                size_matched: Some("10000000".into()),
            })
        );
    }

    #[test]
    fn missing_local_size_is_written() {
        let order = remote(OrderStatus::Cancelled, "0");
        let OrderSyncDecision::Update(update) = evaluate_order_sync_decision(&order, None) else {
            panic!("expected update");
        };
        assert_eq!(update.size_matched.as_deref(), Some("0"));
    }

    #[test]
    fn resync_writes_status_only() {
        let order = remote(OrderStatus::Matched, "2.5");
        let mut local = LocalOrder {
            id: order.id.clone(),
            status: OrderStatus::Live,
            size_matched_micro: Some("1000000".into()),
        };

        let OrderSyncDecision::Update(first) =
            evaluate_order_sync_decision(&order, local.size_matched_micro.as_deref())
        else {
            panic!("expected update");
        };
        assert_eq!(first.size_matched.as_deref(), Some("2500000"));
        local.apply(&first);

        let OrderSyncDecision::Update(second) =
            evaluate_order_sync_decision(&order, local.size_matched_micro.as_deref())
        else {
            panic!("expected update");
        };
        assert_eq!(second.status, OrderStatus::Matched);
        assert_eq!(second.size_matched, None);
        assert_eq!(
            serde_json::to_value(&second).unwrap(),
            serde_json::json!({"status": "matched"})
        );
    }
}
