//! Volume value normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::money::parse_finite;
use crate::domain::VolumeRecord;
use crate::port::outbound::data::RawVolume;

/// Normalize an upstream volume to a numeric string.
///
/// Numbers and numeric strings pass through (strings trimmed, numbers
/// stringified without a trailing `.0`). Null, empty, negative, non-finite
/// and unparseable values become `"0"`. No unit conversion happens here.
#[must_use]
pub fn normalize_volume_value(value: &Value) -> String {
    match value {
        Value::Null => {
            debug!("Missing volume, using 0");
            "0".to_string()
        }
        Value::Number(number) => normalize_number(number),
        Value::String(raw) => normalize_volume_str(raw),
        other => {
            warn!(value = %other, "Non-numeric volume, using 0");
            "0".to_string()
        }
    }
}

/// String form of [`normalize_volume_value`].
#[must_use]
pub fn normalize_volume_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("Empty volume, using 0");
        return "0".to_string();
    }
    match parse_finite(trimmed) {
        Some(volume) if volume >= 0.0 => trimmed.to_string(),
        _ => {
            warn!(value = raw, "Invalid volume, using 0");
            "0".to_string()
        }
    }
}

fn normalize_number(number: &serde_json::Number) -> String {
    if let Some(unsigned) = number.as_u64() {
        return unsigned.to_string();
    }
    if number.as_i64().is_some() {
        warn!(value = %number, "Negative volume, using 0");
        return "0".to_string();
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float >= 0.0 => Decimal::try_from(float)
            .map(|d| d.normalize().to_string())
            .unwrap_or_else(|_| number.to_string()),
        _ => {
            warn!(value = %number, "Invalid volume, using 0");
            "0".to_string()
        }
    }
}

/// Normalize a batch of raw upstream volumes.
#[must_use]
pub fn normalize_volumes(raw: &[RawVolume]) -> Vec<VolumeRecord> {
    raw.iter()
        .map(|entry| VolumeRecord {
            market_id: entry.market_id.clone(),
            volume: normalize_volume_value(&entry.volume),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketId;
    use serde_json::json;

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(normalize_volume_value(&json!(1234)), "1234");
        assert_eq!(normalize_volume_value(&json!(12.5)), "12.5");
        assert_eq!(normalize_volume_value(&json!(100.0)), "100");
        assert_eq!(normalize_volume_value(&json!(0)), "0");
    }

    #[test]
    fn strings_are_trimmed_not_converted() {
        assert_eq!(normalize_volume_value(&json!(" 98765.4321 ")), "98765.4321");
        assert_eq!(normalize_volume_value(&json!("0.10")), "0.10");
    }

    #[test]
    fn values_beyond_decimal_range_pass_through() {
        assert_eq!(normalize_volume_value(&json!("1e30")), "1e30");
        assert_eq!(
            normalize_volume_value(&json!("100000000000000000000000000000")),
            "100000000000000000000000000000"
        );
        assert_eq!(normalize_volume_value(&json!(1e30)), "1e30");
        assert_eq!(normalize_volume_value(&json!("-1e30")), "0");
    }

    #[test]
    fn unusable_values_become_zero() {
        for value in [
            json!(null),
            json!(""),
            json!("   "),
            json!("abc"),
            json!("NaN"),
            json!("Infinity"),
            json!("-5"),
            json!(-5),
            json!(-0.25),
            json!(true),
            json!({"v": 1}),
        ] {
            assert_eq!(normalize_volume_value(&value), "0", "{value}");
        }
    }

    #[test]
    fn batch_keeps_market_ids() {
        let raw = vec![
            RawVolume {
                market_id: MarketId::new("a"),
                volume: json!("10"),
            },
            RawVolume {
                market_id: MarketId::new("b"),
                volume: json!(null),
            },
        ];
        let records = normalize_volumes(&raw);
        assert_eq!(records[0].volume, "10");
        assert_eq!(records[1].market_id.as_str(), "b");
        assert_eq!(records[1].volume, "0");
    }
}
