//! ISO-8601 timestamp helpers.
//!
//! Timestamps are stored as strings so that data files written by earlier
//! versions of the tool (local time, microsecond precision, no offset) load
//! and save byte-for-byte. Offset-qualified RFC 3339 values are accepted too.

use chrono::{DateTime, Local, NaiveDateTime};

const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Returns the current local time in the stored format.
pub fn now() -> String {
    format(Local::now().naive_local())
}

/// Formats a naive local time in the stored format.
pub fn format(at: NaiveDateTime) -> String {
    at.format(STORED_FORMAT).to_string()
}

/// Parses a stored timestamp, with or without fractional seconds or offset.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, SECONDS_FORMAT))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Truncates a timestamp to whole seconds for display.
///
/// Values that do not parse are cut to their first 19 characters.
pub fn to_seconds(value: &str) -> String {
    match parse(value) {
        Some(at) => at.format(SECONDS_FORMAT).to_string(),
        None => value.chars().take(19).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_round_trips() {
        let stamp = now();
        assert!(parse(&stamp).is_some(), "unparsable: {stamp}");
    }

    #[test]
    fn test_parse_accepts_python_isoformat_variants() {
        assert!(parse("2024-05-01T09:30:12.123456").is_some());
        assert!(parse("2024-05-01T09:30:12").is_some());
        assert!(parse("2024-05-01T09:30:12+02:00").is_some());
        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds("2024-05-01T09:30:12.123456"), "2024-05-01T09:30:12");
        assert_eq!(to_seconds("2024-05-01T09:30:12"), "2024-05-01T09:30:12");
        assert_eq!(to_seconds("not a timestamp at all"), "not a timestamp at ");
    }
}
