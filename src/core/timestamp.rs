//! Timestamp normalization for relief-record feeds
//!
//! Submission feeds deliver timestamps in whatever shape the intake tool
//! produced: composite `"2025-12-03 01:42:01.210000"` strings, date-only
//! strings with `-` or `/` separators, RFC 3339 text, raw epoch-millis
//! numbers, or nothing at all. Everything normalizes to one canonical UTC
//! millisecond instant used for ordering, plus a human display bucket.
//! Unparseable values degrade to [`UNKNOWN_INSTANT`] so a single bad record
//! never aborts a scan.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Sentinel instant assigned when a raw timestamp cannot be parsed.
///
/// Sorts last under the default `createdAt desc` order, so records with a
/// broken timestamp sink to the end of listings instead of disappearing.
pub const UNKNOWN_INSTANT: i64 = 0;

/// A raw timestamp exactly as it arrived from a submission feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Native epoch-milliseconds value
    Millis(i64),
    /// Composite, date-only, or RFC 3339 text
    Text(String),
}

impl RawTimestamp {
    /// The original representation, for display purposes only.
    pub fn raw_string(&self) -> String {
        match self {
            RawTimestamp::Millis(ms) => ms.to_string(),
            RawTimestamp::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for RawTimestamp {
    fn from(ms: i64) -> Self {
        RawTimestamp::Millis(ms)
    }
}

impl From<&str> for RawTimestamp {
    fn from(s: &str) -> Self {
        RawTimestamp::Text(s.to_string())
    }
}

impl From<String> for RawTimestamp {
    fn from(s: String) -> Self {
        RawTimestamp::Text(s)
    }
}

/// Normalize a raw timestamp into a canonical UTC millisecond instant.
///
/// Never fails: missing or unparseable values return [`UNKNOWN_INSTANT`].
pub fn canonical_instant(raw: Option<&RawTimestamp>) -> i64 {
    match raw {
        None => UNKNOWN_INSTANT,
        Some(RawTimestamp::Millis(ms)) => *ms,
        Some(RawTimestamp::Text(text)) => parse_text(text.trim()),
    }
}

fn parse_text(text: &str) -> i64 {
    if text.is_empty() {
        return UNKNOWN_INSTANT;
    }

    if let Some(ms) = parse_composite(text) {
        return ms;
    }

    // RFC 3339 with an explicit offset, e.g. "2025-12-03T07:42:01+06:00"
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.with_timezone(&Utc).timestamp_millis();
    }

    // Epoch millis that arrived as text
    if let Ok(ms) = text.parse::<i64>() {
        return ms;
    }

    UNKNOWN_INSTANT
}

fn composite_regex() -> &'static Regex {
    static COMPOSITE_REGEX: OnceLock<Regex> = OnceLock::new();
    COMPOSITE_REGEX.get_or_init(|| {
        // Date part with `-` or `/` separators, optional time, optional fraction
        Regex::new(
            r"^(\d{1,4})[-/](\d{1,2})[-/](\d{1,4})(?:[ T](\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.(\d{1,9}))?)?)?$",
        )
        .unwrap()
    })
}

/// Build the instant from explicit components rather than a generic parser.
///
/// Separator-ambiguous dates resolve deterministically: a 4-digit leading
/// component reads as year-month-day, anything else as day-month-year (the
/// intake feeds' slash-date convention). Date-only strings take the same
/// path with a midnight time.
fn parse_composite(text: &str) -> Option<i64> {
    let caps = composite_regex().captures(text)?;

    let lead: u32 = caps[1].parse().ok()?;
    let mid: u32 = caps[2].parse().ok()?;
    let tail: u32 = caps[3].parse().ok()?;

    let (year, month, day) = if caps[1].len() == 4 {
        (lead as i32, mid, tail)
    } else {
        (tail as i32, mid, lead)
    };

    let hour: u32 = caps.get(4).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let minute: u32 = caps.get(5).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let second: u32 = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let micros = caps.get(7).map_or(0, |m| fraction_micros(m.as_str()));

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let datetime = date.and_hms_micro_opt(hour, minute, second, micros)?;
    Some(Utc.from_utc_datetime(&datetime).timestamp_millis())
}

/// Fractional-second digits to microseconds, truncating past 6 digits.
fn fraction_micros(digits: &str) -> u32 {
    let mut value: u32 = 0;
    for ch in digits.chars().take(6) {
        value = value * 10 + ch.to_digit(10).unwrap_or(0);
    }
    // Scale short fractions: ".21" means 210000 µs, not 21 µs
    for _ in digits.len().min(6)..6 {
        value *= 10;
    }
    value
}

/// Human display bucket for a canonical instant, relative to `now`.
///
/// Buckets: `"Today"`, `"Yesterday"`, `"{n} days ago"` under a week,
/// `"{n} weeks ago"` under 30 days, then a plain `month/day/year` date.
/// The sentinel instant and anything outside chrono's representable range
/// come back as `"Unknown"`. Instants ahead of `now` clamp to `"Today"`.
pub fn display_bucket_at(instant_ms: i64, now: DateTime<Utc>) -> String {
    if instant_ms == UNKNOWN_INSTANT {
        return "Unknown".to_string();
    }
    let Some(then) = Utc.timestamp_millis_opt(instant_ms).single() else {
        return "Unknown".to_string();
    };

    let days = (now.date_naive() - then.date_naive()).num_days();
    if days <= 0 {
        return "Today".to_string();
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }
    if days < 30 {
        return format!("{} weeks ago", days / 7);
    }
    format!("{}/{}/{}", then.month(), then.day(), then.year())
}

/// Human display bucket relative to the current wall clock.
pub fn display_bucket(instant_ms: i64) -> String {
    display_bucket_at(instant_ms, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn instant(text: &str) -> i64 {
        canonical_instant(Some(&RawTimestamp::from(text)))
    }

    // --- Composite parsing ---

    #[test]
    fn test_composite_year_first() {
        let expected = Utc
            .with_ymd_and_hms(2025, 12, 3, 1, 42, 1)
            .unwrap()
            .timestamp_millis()
            + 210;
        let got = instant("2025-12-03 01:42:01.210000");
        assert!((got - expected).abs() <= 1, "got {} expected {}", got, expected);
    }

    #[test]
    fn test_composite_day_first_slashes() {
        let expected = Utc
            .with_ymd_and_hms(2025, 12, 3, 1, 42, 1)
            .unwrap()
            .timestamp_millis();
        assert_eq!(instant("03/12/2025 01:42:01"), expected);
    }

    #[test]
    fn test_date_only_is_midnight() {
        let expected = Utc
            .with_ymd_and_hms(2025, 1, 5, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(instant("2025-01-05"), expected);
        assert_eq!(instant("05/01/2025"), expected);
    }

    #[test]
    fn test_short_fraction_scales_up() {
        let base = Utc
            .with_ymd_and_hms(2025, 1, 5, 10, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(instant("2025-01-05 10:00:00.5"), base + 500);
        assert_eq!(instant("2025-01-05 10:00:00.21"), base + 210);
    }

    #[test]
    fn test_long_fraction_truncates() {
        let base = Utc
            .with_ymd_and_hms(2025, 1, 5, 10, 0, 0)
            .unwrap()
            .timestamp_millis();
        // Nanosecond feeds lose sub-microsecond digits, nothing else
        assert_eq!(instant("2025-01-05 10:00:00.123456789"), base + 123);
    }

    // --- Fallback parsing ---

    #[test]
    fn test_rfc3339_with_offset() {
        let expected = instant("2025-12-03 07:42:01.210000");
        assert_eq!(instant("2025-12-03T13:42:01.210+06:00"), expected);
    }

    #[test]
    fn test_epoch_millis_text_and_native() {
        assert_eq!(instant("1735689600000"), 1735689600000);
        assert_eq!(
            canonical_instant(Some(&RawTimestamp::from(1735689600000i64))),
            1735689600000
        );
    }

    // --- Degradation ---

    #[test]
    fn test_missing_and_empty_degrade_to_sentinel() {
        assert_eq!(canonical_instant(None), UNKNOWN_INSTANT);
        assert_eq!(instant(""), UNKNOWN_INSTANT);
        assert_eq!(instant("   "), UNKNOWN_INSTANT);
    }

    #[test]
    fn test_gibberish_degrades_to_sentinel() {
        assert_eq!(instant("next tuesday"), UNKNOWN_INSTANT);
        assert_eq!(instant("12-"), UNKNOWN_INSTANT);
        assert_eq!(instant("--:--"), UNKNOWN_INSTANT);
    }

    #[test]
    fn test_out_of_range_components_degrade() {
        assert_eq!(instant("2025-13-45 10:00:00"), UNKNOWN_INSTANT);
        assert_eq!(instant("2025-02-30"), UNKNOWN_INSTANT);
        assert_eq!(instant("2025-01-05 99:99:99"), UNKNOWN_INSTANT);
    }

    #[test]
    fn test_raw_string_preserves_original() {
        assert_eq!(RawTimestamp::from("22/08/2024").raw_string(), "22/08/2024");
        assert_eq!(RawTimestamp::from(42i64).raw_string(), "42");
    }

    // --- Display buckets ---

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_bucket_today_and_yesterday() {
        let now = fixed_now();
        let this_morning = (now - Duration::hours(8)).timestamp_millis();
        assert_eq!(display_bucket_at(this_morning, now), "Today");
        let yesterday = (now - Duration::days(1)).timestamp_millis();
        assert_eq!(display_bucket_at(yesterday, now), "Yesterday");
    }

    #[test]
    fn test_bucket_days_and_weeks() {
        let now = fixed_now();
        let three_days = (now - Duration::days(3)).timestamp_millis();
        assert_eq!(display_bucket_at(three_days, now), "3 days ago");
        let one_week = (now - Duration::days(7)).timestamp_millis();
        assert_eq!(display_bucket_at(one_week, now), "1 weeks ago");
        let four_weeks = (now - Duration::days(29)).timestamp_millis();
        assert_eq!(display_bucket_at(four_weeks, now), "4 weeks ago");
    }

    #[test]
    fn test_bucket_old_dates_format_plainly() {
        let now = fixed_now();
        let old = (now - Duration::days(45)).timestamp_millis();
        assert_eq!(display_bucket_at(old, now), "7/6/2025");
    }

    #[test]
    fn test_bucket_future_clamps_to_today() {
        let now = fixed_now();
        let future = (now + Duration::days(2)).timestamp_millis();
        assert_eq!(display_bucket_at(future, now), "Today");
    }

    #[test]
    fn test_bucket_never_panics_on_extremes() {
        let now = fixed_now();
        assert_eq!(display_bucket_at(UNKNOWN_INSTANT, now), "Unknown");
        assert_eq!(display_bucket_at(i64::MAX, now), "Unknown");
        assert_eq!(display_bucket_at(i64::MIN, now), "Unknown");
    }
}
