//! Free-form date/time parsing.
//!
//! Accepted grammar, tried in order:
//!
//! 1. RFC 3339 (`2023-01-01T12:00:00Z`, `2023-01-01 12:00:00.250+08:00`)
//! 2. RFC 2822 (`Sun, 01 Jan 2023 12:00:00 +0000`)
//! 3. Any naive form below followed by ` UTC` or ` GMT`, read as UTC
//! 4. Naive date-times, read in the reference zone:
//!    `YYYY-MM-DD HH:MM[:SS[.fff]]`, `YYYY-MM-DDTHH:MM[:SS[.fff]]`,
//!    `YYYY/MM/DD HH:MM[:SS[.fff]]`
//! 5. Dates alone (`YYYY-MM-DD`, `YYYY/MM/DD`), midnight in the reference zone

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::timestamp::Instant;
use crate::zone::Zone;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const UTC_SUFFIXES: &[&str] = &[" utc", " gmt"];

/// Parses `value` into an instant. Strings without an explicit offset are
/// read as wall-clock time in `zone`.
pub fn parse_date_time(value: &str, zone: &Zone) -> Option<Instant> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        tracing::debug!(input = trimmed, "parsed as RFC 3339");
        return Instant::from_datetime(&dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        tracing::debug!(input = trimmed, "parsed as RFC 2822");
        return Instant::from_datetime(&dt);
    }

    if let Some(body) = strip_utc_suffix(trimmed) {
        let naive = parse_naive(body)?;
        tracing::debug!(input = trimmed, "parsed as naive UTC");
        return Instant::from_datetime(&Utc.from_utc_datetime(&naive));
    }

    let naive = parse_naive(trimmed)?;
    tracing::debug!(input = trimmed, zone = ?zone, "parsed as naive wall clock");
    zone.localize(&naive)
        .and_then(|dt| Instant::from_datetime(&dt))
}

fn strip_utc_suffix(value: &str) -> Option<&str> {
    let lower = value.to_ascii_lowercase();
    UTC_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map(|suffix| value[..value.len() - suffix.len()].trim_end())
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}
