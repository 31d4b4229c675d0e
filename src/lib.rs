pub mod cli;
pub mod config;
pub mod converter;
pub mod date_parser;
pub mod error;
pub mod lang;
pub mod repl;
pub mod report;
pub mod shell;
pub mod timestamp;
pub mod zone;

pub use converter::{
    Classified, ConversionRequest, ConversionResult, DisplayBundle, ErrorDisplay, Mode, Outcome,
    classify_input, convert, render, resolve_date_to_timestamp, resolve_timestamp_to_date,
};
pub use error::{ConvertError, FormattingFailure};
pub use lang::Language;
pub use shell::Shell;
pub use timestamp::{InputUnit, Instant, OutputUnit};
pub use zone::Zone;
