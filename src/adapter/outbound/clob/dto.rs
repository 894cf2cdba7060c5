//! CLOB API response types.

use serde::Deserialize;

use crate::domain::{OrderId, OrderStatus, RemoteOrder};

/// An order as returned by `GET /data/order/{id}`.
///
/// Only the fields the sync reads. The rest of the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct ClobOrder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub size_matched: Option<String>,
}

impl ClobOrder {
    /// Convert to a snapshot. Returns `None` for the empty body the engine
    /// sends for unknown orders.
    #[must_use]
    pub fn into_snapshot(self) -> Option<RemoteOrder> {
        if self.id.is_empty() {
            return None;
        }
        Some(RemoteOrder {
            id: OrderId::new(self.id),
            status: OrderStatus::from(self.status),
            size_matched: self.size_matched.unwrap_or_else(|| "0".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_payload() {
        let json = r#"{
            "id": "0xb816482a5187a3d3db49cbaf6fe3ddf24f53e6c712b42bf4c1df5ee5cde6e4ee",
            "status": "MATCHED",
            "owner": "f4f247b7-4ac7-ff29-a152-04fda0a8755a",
            "maker_address": "0x1234",
            "market": "0xbd31dc8a20211944f6b70f31557f1001557b59905b7738480ca09bd4532f84af",
            "asset_id": "52114319501245915516055106046884209969926127482827954674443846427813813222426",
            "side": "BUY",
            "original_size": "100",
            "size_matched": "42.5",
            "price": "0.57",
            "outcome": "Yes"
        }"#;
        let order: ClobOrder = serde_json::from_str(json).unwrap();
        let snapshot = order.into_snapshot().unwrap();
        assert_eq!(snapshot.status, OrderStatus::Matched);
        assert_eq!(snapshot.size_matched, "42.5");
    }

    #[test]
    fn empty_body_is_unknown_order() {
        let order: ClobOrder = serde_json::from_str("{}").unwrap();
        assert!(order.into_snapshot().is_none());
    }
}
