use chrono::{Datelike, NaiveDateTime, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::date_parser::parse_date_time;
use crate::error::ConvertError;
use crate::lang::Language;
use crate::timestamp::{InputUnit, Instant, OutputUnit, instant_from_number};
use crate::zone::{LOCAL, Zone};

/// Shown in every detail field when a conversion fails.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Mode {
    /// Epoch value in, date out
    #[default]
    #[value(name = "timestamp")]
    #[serde(rename = "timestamp")]
    TimestampToDate,
    /// Date string in, epoch value out
    #[value(name = "date")]
    #[serde(rename = "date")]
    DateToTimestamp,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::TimestampToDate => Mode::DateToTimestamp,
            Mode::DateToTimestamp => Mode::TimestampToDate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub mode: Mode,
    pub input_unit: InputUnit,
    pub output_unit: OutputUnit,
    pub timezone: String,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, mode: Mode) -> Self {
        ConversionRequest {
            raw_input: raw_input.into(),
            mode,
            input_unit: InputUnit::default(),
            output_unit: OutputUnit::default(),
            timezone: LOCAL.to_string(),
        }
    }
}

pub type ConversionResult = Result<Instant, ConvertError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    Numeric(f64),
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBundle {
    pub primary: String,
    pub epoch_seconds: i64,
    pub epoch_millis: i64,
    pub utc_string: String,
    pub localized_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDisplay {
    pub message: String,
    pub epoch_seconds: String,
    pub epoch_millis: String,
    pub utc_string: String,
}

impl ErrorDisplay {
    fn new(message: impl Into<String>) -> Self {
        ErrorDisplay {
            message: message.into(),
            epoch_seconds: PLACEHOLDER.to_string(),
            epoch_millis: PLACEHOLDER.to_string(),
            utc_string: PLACEHOLDER.to_string(),
        }
    }
}

/// What the caller shows after one conversion event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Empty input: every result field is hidden.
    Hidden,
    Converted(DisplayBundle),
    Failed(ErrorDisplay),
}

pub fn classify_input(raw: &str) -> Classified<'_> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Classified::Numeric(value),
        _ => Classified::Text(trimmed),
    }
}

pub fn resolve_timestamp_to_date(
    raw: &str,
    input_unit: InputUnit,
    reference_zone: &Zone,
) -> ConversionResult {
    let instant = match classify_input(raw) {
        Classified::Numeric(value) => instant_from_number(value, input_unit),
        Classified::Text(text) => parse_date_time(text, reference_zone),
    };
    instant.ok_or_else(|| unrecognized(raw))
}

/// Numeric-looking strings get no unit inference here; they go to the date
/// parser like any other text.
pub fn resolve_date_to_timestamp(raw: &str, reference_zone: &Zone) -> ConversionResult {
    parse_date_time(raw, reference_zone).ok_or_else(|| unrecognized(raw))
}

fn unrecognized(raw: &str) -> ConvertError {
    ConvertError::UnrecognizedFormat {
        input: raw.trim().to_string(),
    }
}

pub fn render(
    result: &ConversionResult,
    mode: Mode,
    output_unit: OutputUnit,
    timezone: &str,
    language: Language,
) -> Outcome {
    let instant = match result {
        Ok(instant) => instant,
        Err(err) => {
            tracing::debug!(error = %err, "conversion failed");
            return Outcome::Failed(ErrorDisplay::new(language.unrecognized_format()));
        }
    };

    let localized_string = match Zone::resolve(timezone) {
        Ok(zone) => format_wall_clock(&zone.wall_clock(instant)),
        Err(failure) => {
            tracing::warn!(timezone, error = %failure, "cannot format in requested timezone");
            language.formatting_error(&failure)
        }
    };

    let primary = match mode {
        Mode::TimestampToDate => localized_string.clone(),
        Mode::DateToTimestamp => instant.in_unit(output_unit).to_string(),
    };

    Outcome::Converted(DisplayBundle {
        primary,
        epoch_seconds: instant.seconds(),
        epoch_millis: instant.millis(),
        utc_string: format_utc(instant),
        localized_string,
    })
}

/// Runs one full classify, resolve and render pass.
pub fn convert(request: &ConversionRequest, language: Language) -> Outcome {
    let raw = request.raw_input.trim();
    if raw.is_empty() {
        return Outcome::Hidden;
    }

    let reference_zone = Zone::resolve_or_local(&request.timezone);
    let result = match request.mode {
        Mode::TimestampToDate => {
            resolve_timestamp_to_date(raw, request.input_unit, &reference_zone)
        }
        Mode::DateToTimestamp => resolve_date_to_timestamp(raw, &reference_zone),
    };
    render(
        &result,
        request.mode,
        request.output_unit,
        &request.timezone,
        language,
    )
}

/// `YYYY-MM-DD HH:MM:SS`, zero padded, 24-hour clock. Years past 9999 carry
/// a leading `+` so the date parser can read them back.
pub fn format_wall_clock(value: &NaiveDateTime) -> String {
    format!(
        "{}-{:02}-{:02} {:02}:{:02}:{:02}",
        format_year(value.year()),
        value.month(),
        value.day(),
        value.hour(),
        value.minute(),
        value.second()
    )
}

fn format_year(year: i32) -> String {
    if year > 9999 {
        format!("+{year}")
    } else {
        format!("{year:04}")
    }
}

/// `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_utc(instant: &Instant) -> String {
    format!("{} UTC", format_wall_clock(&instant.utc().naive_utc()))
}
