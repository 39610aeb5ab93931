#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use silentspeak_contracts::MonotonicTimeNs;

const MINUTE_SECS: u64 = 60;
const HOUR_SECS: u64 = 60 * MINUTE_SECS;
const DAY_SECS: u64 = 24 * HOUR_SECS;

/// "just now", "5m ago", "3h ago", then a short calendar date ("Mar 5").
pub fn format_relative_time(ts: MonotonicTimeNs, now: MonotonicTimeNs) -> String {
    let elapsed = now.secs_since(ts);
    if elapsed < MINUTE_SECS {
        return "just now".to_string();
    }
    if elapsed < HOUR_SECS {
        return format!("{}m ago", elapsed / MINUTE_SECS);
    }
    if elapsed < DAY_SECS {
        return format!("{}h ago", elapsed / HOUR_SECS);
    }

    let secs = (ts.0 / 1_000_000_000) as i64;
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%b %-d").to_string(),
        None => format!("{}d ago", elapsed / DAY_SECS),
    }
}
