//! Paging, time budget and batching guards for sync jobs.

use tracing::{debug, warn};

use crate::config::{
    DEFAULT_ORDER_SYNC_LIMIT, MAX_ORDER_SYNC_LIMIT, SYNC_TIME_LIMIT_MS, VOLUME_BATCH_SIZE,
};

/// Parse a page-size parameter.
///
/// Missing, unparseable or non-positive values yield `default`; anything
/// else is truncated to an integer and clamped to `max`.
///
/// ```
/// use orderdesk::application::sync::parse_limit_param;
///
/// assert_eq!(parse_limit_param(Some("99999"), 200, 500), 500);
/// assert_eq!(parse_limit_param(Some("0"), 200, 500), 200);
/// assert_eq!(parse_limit_param(None, 200, 500), 200);
/// ```
#[must_use]
pub fn parse_limit_param(raw: Option<&str>, default: usize, max: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    match parsed {
        Some(value) if value >= 1.0 => {
            // Saturating float-to-int cast, clamped below
            (value.trunc() as usize).min(max)
        }
        _ => {
            debug!(raw, default, "Invalid limit parameter, using default");
            default
        }
    }
}

/// [`parse_limit_param`] with the order sync defaults.
#[must_use]
pub fn parse_order_sync_limit(raw: Option<&str>) -> usize {
    parse_limit_param(raw, DEFAULT_ORDER_SYNC_LIMIT, MAX_ORDER_SYNC_LIMIT)
}

/// Whether a job started at `started_at_ms` has used up `limit_ms`.
#[must_use]
pub const fn has_reached_time_limit(started_at_ms: i64, now_ms: i64, limit_ms: i64) -> bool {
    now_ms.saturating_sub(started_at_ms) >= limit_ms
}

/// [`has_reached_time_limit`] with the default sync budget.
#[must_use]
pub const fn has_reached_sync_time_limit(started_at_ms: i64, now_ms: i64) -> bool {
    has_reached_time_limit(started_at_ms, now_ms, SYNC_TIME_LIMIT_MS)
}

/// Split `items` into ordered chunks of `chunk_size`; the last may be
/// shorter.
///
/// A zero chunk size falls back to [`VOLUME_BATCH_SIZE`].
#[must_use]
pub fn chunk_volume_work<T: Clone>(items: &[T], chunk_size: usize) -> Vec<Vec<T>> {
    let chunk_size = if chunk_size == 0 {
        warn!(fallback = VOLUME_BATCH_SIZE, "Zero chunk size, using default batch size");
        VOLUME_BATCH_SIZE
    } else {
        chunk_size
    };
    items.chunks(chunk_size).map(<[T]>::to_vec).collect()
}
