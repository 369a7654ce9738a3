// Timestamp parsing for server-supplied `lastUpdated` values
use chrono::{DateTime, FixedOffset, Timelike, Utc};

type TimestampParser = fn(&str) -> Option<DateTime<Utc>>;

/// Parsers tried in order; the first one that accepts the input wins.
const PARSERS: [TimestampParser; 4] = [
    parse_internet_fractional,
    parse_internet_whole_seconds,
    parse_fixed_millis,
    parse_fixed_whole_seconds,
];

/// Parse a `lastUpdated` value into an absolute UTC instant.
///
/// Accepted shapes, in priority order:
/// 1. `2024-12-14T10:30:00.000Z` (internet date-time with fractional seconds)
/// 2. `2024-12-14T10:30:00Z` (internet date-time, whole seconds)
/// 3. `2024-12-14T10:30:00.000+0400` (millisecond fraction, RFC 822 offset)
/// 4. `2024-12-14T10:30:00+0400` (whole seconds, RFC 822 offset)
///
/// Returns `None` when no shape matches. Leap seconds (`:60`) are rejected.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    PARSERS.iter().find_map(|parse| parse(raw))
}

fn parse_internet_fractional(raw: &str) -> Option<DateTime<Utc>> {
    parse_internet(raw, true)
}

fn parse_internet_whole_seconds(raw: &str) -> Option<DateTime<Utc>> {
    parse_internet(raw, false)
}

fn parse_fixed_millis(raw: &str) -> Option<DateTime<Utc>> {
    parse_fixed(raw, "%Y-%m-%dT%H:%M:%S%.3f%z")
}

fn parse_fixed_whole_seconds(raw: &str) -> Option<DateTime<Utc>> {
    parse_fixed(raw, "%Y-%m-%dT%H:%M:%S%z")
}

/// RFC 3339 with an upper-case `T` separator. `fractional` selects whether the
/// seconds field must or must not carry a fraction.
fn parse_internet(raw: &str, fractional: bool) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    if bytes.get(10) != Some(&b'T') {
        return None;
    }
    // "YYYY-MM-DDTHH:MM:SS" is 19 bytes; a fraction starts right after it
    let has_fraction = bytes.get(19) == Some(&b'.');
    if has_fraction != fractional {
        return None;
    }

    DateTime::parse_from_rfc3339(raw).ok().and_then(to_utc)
}

fn parse_fixed(raw: &str, pattern: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, pattern).ok().and_then(to_utc)
}

fn to_utc(parsed: DateTime<FixedOffset>) -> Option<DateTime<Utc>> {
    // chrono encodes a leap second as a nanosecond value past one second
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(parsed.with_timezone(&Utc))
}
