//! Order and volume records exchanged with the matching engine and the
//! local mirror.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::{MarketId, OrderId};

/// Order status as reported by the matching engine.
///
/// Unknown statuses are kept verbatim so a newer engine does not break the
/// sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Resting on the book.
    Live,
    Matched,
    Cancelled,
    /// Marketable, held by the matching delay.
    Delayed,
    /// Marketable, the delay failed and the order was placed on the book
    /// instead. It can still fill.
    Unmatched,
    Other(String),
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Live => "live",
            Self::Matched => "matched",
            Self::Cancelled => "cancelled",
            Self::Delayed => "delayed",
            Self::Unmatched => "unmatched",
            Self::Other(s) => s,
        }
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// No further fills can occur.
    ///
    /// Only `Matched` and `Cancelled` qualify. `Delayed` and `Unmatched`
    /// orders still rest with the engine, so the sync keeps polling them.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Matched | Self::Cancelled)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "live" => Self::Live,
            "matched" => Self::Matched,
            "cancelled" | "canceled" => Self::Cancelled,
            "delayed" => Self::Delayed,
            "unmatched" => Self::Unmatched,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for OrderStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an order fetched from the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOrder {
    pub id: OrderId,
    pub status: OrderStatus,
    /// Decimal share count, e.g. `"12.5"`.
    pub size_matched: String,
}

/// Locally mirrored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalOrder {
    pub id: OrderId,
    pub status: OrderStatus,
    /// Micro-unit integer string.
    #[serde(default)]
    pub size_matched_micro: Option<String>,
}

impl LocalOrder {
    /// Apply an update payload in place.
    pub fn apply(&mut self, update: &OrderUpdate) {
        self.status = update.status.clone();
        if let Some(size) = &update.size_matched {
            self.size_matched_micro = Some(size.clone());
        }
    }
}

/// Fields to write back to a local order.
///
/// `size_matched` is present only when it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_matched: Option<String>,
}

/// Traded volume of a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub market_id: MarketId,
    /// Normalized numeric string, `"0"` when upstream was unusable.
    pub volume: String,
}
