use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::FormattingFailure;
use crate::timestamp::Instant;

/// Sentinel timezone identifier for the host's own zone.
pub const LOCAL: &str = "local";

/// The zone used to read and write wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Named(Tz),
}

impl Zone {
    pub fn resolve(id: &str) -> Result<Self, FormattingFailure> {
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(LOCAL) {
            return Ok(Zone::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| FormattingFailure::UnknownTimezone(trimmed.to_string()))
    }

    /// Like [`Zone::resolve`], falling back to the host zone for unknown ids.
    pub fn resolve_or_local(id: &str) -> Self {
        Self::resolve(id).unwrap_or(Zone::Local)
    }

    /// Wall-clock reading of `instant` in this zone.
    pub fn wall_clock(&self, instant: &Instant) -> NaiveDateTime {
        let utc = instant.utc();
        match self {
            Zone::Local => utc.with_timezone(&Local).naive_local(),
            Zone::Named(tz) => utc.with_timezone(tz).naive_local(),
        }
    }

    /// Maps a wall-clock time in this zone to an absolute time.
    ///
    /// Ambiguous readings (clocks turned back) take the earlier instant.
    /// Readings inside a gap (clocks turned forward) move forward one hour.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Local => localize_in(&Local, naive),
            Zone::Named(tz) => localize_in(tz, naive),
        }
    }
}

fn localize_in<Z: TimeZone>(zone: &Z, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(dt) = zone.from_local_datetime(naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }
    let shifted = naive.checked_add_signed(Duration::hours(1))?;
    zone.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
