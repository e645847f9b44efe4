//! Time utilities: parsing HH:MM, interval durations, midnight handling.

use chrono::NaiveTime;

pub const MINUTES_PER_DAY: i64 = 1440;

/// End-of-day marker accepted in activity logs ("24:00" == "00:00" of the next day).
pub const MIDNIGHT_SENTINEL: &str = "24:00";

/// How a non-positive raw interval (end <= start) is turned into minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationPolicy {
    /// end <= start contributes nothing.
    ClampToZero,
    /// end <= start is read as crossing midnight: raw + 1440.
    OvernightWrap,
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Replace the "24:00" sentinel with "00:00" so chrono can parse it.
pub fn normalize_sentinel(t: &str) -> &str {
    let trimmed = t.trim();
    if trimmed == MIDNIGHT_SENTINEL {
        "00:00"
    } else {
        trimmed
    }
}

fn minute_of_day(t: &str) -> Option<i64> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0)?;
    parse_time(normalize_sentinel(t)).map(|time| minutes_between(midnight, time))
}

/// Minute of day for an interval start. "24:00" is midnight (0).
pub fn start_minute(t: &str) -> Option<i64> {
    minute_of_day(t)
}

/// Minute of day for an interval end. "24:00" closes the day (1440).
pub fn end_minute(t: &str) -> Option<i64> {
    let minute = minute_of_day(t)?;
    if t.trim() == MIDNIGHT_SENTINEL {
        Some(minute + MINUTES_PER_DAY)
    } else {
        Some(minute)
    }
}

/// Raw `end - start` in minutes, or None when either side is not HH:MM.
pub fn raw_minutes(start: &str, end: &str) -> Option<i64> {
    Some(end_minute(end)? - start_minute(start)?)
}

/// Duration of one interval under `policy`. Unparsable times give 0.
pub fn interval_minutes(start: &str, end: &str, policy: DurationPolicy) -> i64 {
    match raw_minutes(start, end) {
        Some(raw) if raw > 0 => raw,
        Some(raw) => match policy {
            DurationPolicy::ClampToZero => 0,
            DurationPolicy::OvernightWrap => raw + MINUTES_PER_DAY,
        },
        None => 0,
    }
}
