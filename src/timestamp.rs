use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Magnitudes below this are read as seconds when the unit is `auto`.
/// Ten billion seconds lands in the year 2286.
pub const AUTO_SECONDS_LIMIT: f64 = 10_000_000_000.0;

/// Largest magnitude of a valid time value, in milliseconds (about 275,000
/// years either side of the epoch).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputUnit {
    Seconds,
    Millis,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    Seconds,
    #[default]
    Millis,
}

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub fn from_millis(millis: i64) -> Option<Self> {
        if millis.unsigned_abs() > MAX_EPOCH_MILLIS.unsigned_abs() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(millis).map(Instant)
    }

    /// Sub-millisecond precision is floored, so pre-1970 instants move
    /// toward negative infinity.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Option<Self> {
        Self::from_millis(value.timestamp_millis())
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Floor division, so `-1` ms is second `-1`.
    pub fn seconds(&self) -> i64 {
        self.millis().div_euclid(1000)
    }

    pub fn in_unit(&self, unit: OutputUnit) -> i64 {
        match unit {
            OutputUnit::Seconds => self.seconds(),
            OutputUnit::Millis => self.millis(),
        }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scales a numeric input to milliseconds according to `unit`.
pub fn scale_to_millis(value: f64, unit: InputUnit) -> f64 {
    match unit {
        InputUnit::Seconds => value * 1000.0,
        InputUnit::Millis => value,
        InputUnit::Auto if value.abs() < AUTO_SECONDS_LIMIT => {
            tracing::debug!(value, "auto unit: treating input as seconds");
            value * 1000.0
        }
        InputUnit::Auto => {
            tracing::debug!(value, "auto unit: treating input as milliseconds");
            value
        }
    }
}

/// Builds an instant from a numeric input, rounding to the nearest
/// millisecond.
pub fn instant_from_number(value: f64, unit: InputUnit) -> Option<Instant> {
    let millis = scale_to_millis(value, unit).round();
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS as f64 {
        return None;
    }
    Instant::from_millis(millis as i64)
}
