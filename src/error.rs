use thiserror::Error;

/// Terminal failure of a single conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unrecognized time format: {input:?}")]
    UnrecognizedFormat { input: String },
}

/// Raised while rendering the zone-dependent field only. The instant itself
/// is still valid when this happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormattingFailure {
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
}
