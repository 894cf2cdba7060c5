//! Order intent as entered by a trader, before signing.

use std::fmt;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Order side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Whether the order crosses the book now or rests at a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    #[default]
    Market,
    Limit,
}

/// How a resting limit order expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationPolicy {
    #[default]
    EndOfDay,
    Custom,
}

/// Expiration settings of a limit order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    /// When false the order is good-till-cancelled.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub policy: ExpirationPolicy,
    /// Unix seconds, only read for [`ExpirationPolicy::Custom`].
    #[serde(default)]
    pub custom_timestamp: Option<i64>,
}

impl Expiration {
    /// Good-till-cancelled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            enabled: false,
            policy: ExpirationPolicy::EndOfDay,
            custom_timestamp: None,
        }
    }

    #[must_use]
    pub const fn end_of_day() -> Self {
        Self {
            enabled: true,
            policy: ExpirationPolicy::EndOfDay,
            custom_timestamp: None,
        }
    }

    #[must_use]
    pub const fn custom(timestamp: Option<i64>) -> Self {
        Self {
            enabled: true,
            policy: ExpirationPolicy::Custom,
            custom_timestamp: timestamp,
        }
    }

    /// Whether the custom timestamp is the one in force.
    #[must_use]
    pub const fn uses_custom(&self) -> bool {
        self.enabled && matches!(self.policy, ExpirationPolicy::Custom)
    }

    /// Resolve the expiry as unix seconds, `None` for good-till-cancelled.
    ///
    /// End of day is the last second of the current UTC day.
    #[must_use]
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<i64> {
        if !self.enabled {
            return None;
        }
        match self.policy {
            ExpirationPolicy::Custom => self.custom_timestamp,
            ExpirationPolicy::EndOfDay => {
                let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
                Some((midnight + Duration::days(1)).timestamp() - 1)
            }
        }
    }
}

/// The free-text order form as submitted.
///
/// Numeric fields stay strings here; the validator parses them so that a
/// half-typed value is reported as a rejection rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub side: OrderSide,
    #[serde(default)]
    pub mode: OrderMode,
    /// Market orders: currency to spend on buys, shares to sell on sells.
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub limit_price: String,
    #[serde(default)]
    pub limit_shares: String,
    #[serde(default)]
    pub expiration: Expiration,
}

impl OrderForm {
    /// A market order for `amount`.
    pub fn market(side: OrderSide, amount: impl Into<String>) -> Self {
        Self {
            side,
            mode: OrderMode::Market,
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// A good-till-cancelled limit order.
    pub fn limit(side: OrderSide, price: impl Into<String>, shares: impl Into<String>) -> Self {
        Self {
            side,
            mode: OrderMode::Limit,
            limit_price: price.into(),
            limit_shares: shares.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = expiration;
        self
    }

    #[must_use]
    pub const fn is_limit(&self) -> bool {
        matches!(self.mode, OrderMode::Limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn disabled_expiration_is_gtc() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(Expiration::none().expires_at(now), None);
    }

    #[test]
    fn end_of_day_is_last_second_of_utc_day() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap();
        assert_eq!(
            Expiration::end_of_day().expires_at(now),
            Some(expected.timestamp())
        );
    }

    #[test]
    fn custom_uses_timestamp() {
        let expiration = Expiration::custom(Some(1_900_000_000));
        assert!(expiration.uses_custom());
        assert_eq!(expiration.expires_at(Utc::now()), Some(1_900_000_000));
    }

    #[test]
    fn form_deserializes_with_defaults() {
        let form: OrderForm = serde_json::from_str(r#"{"side":"sell","amount":"3"}"#).unwrap();
        assert_eq!(form.side, OrderSide::Sell);
        assert_eq!(form.mode, OrderMode::Market);
        assert!(!form.expiration.enabled);
    }
}
