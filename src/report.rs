use std::fmt::Write as _;

use anyhow::Result;

use crate::converter::{Mode, Outcome};
use crate::lang::Language;

/// Human-readable lines for an outcome. Hidden outcomes produce nothing.
pub fn human_report(outcome: &Outcome, mode: Mode, language: Language) -> String {
    let labels = language.labels();
    let mut out = String::new();

    match outcome {
        Outcome::Hidden => {}
        Outcome::Converted(bundle) => {
            let _ = writeln!(out, "{}：{}", labels.result, bundle.primary);
            let _ = writeln!(out, "{}：{}", labels.seconds, bundle.epoch_seconds);
            let _ = writeln!(out, "{}：{}", labels.millis, bundle.epoch_millis);
            let _ = writeln!(out, "{}：{}", labels.utc, bundle.utc_string);
            if mode == Mode::DateToTimestamp {
                let _ = writeln!(out, "{}：{}", labels.localized, bundle.localized_string);
            }
        }
        Outcome::Failed(display) => {
            let _ = writeln!(out, "{}：{}", labels.result, display.message);
            let _ = writeln!(out, "{}：{}", labels.seconds, display.epoch_seconds);
            let _ = writeln!(out, "{}：{}", labels.millis, display.epoch_millis);
            let _ = writeln!(out, "{}：{}", labels.utc, display.utc_string);
        }
    }

    out
}

pub fn print_human_report(outcome: &Outcome, mode: Mode, language: Language) {
    print!("{}", human_report(outcome, mode, language));
}

pub fn print_json_report(outcome: &Outcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{ConversionRequest, convert};

    fn utc_request(raw: &str, mode: Mode) -> ConversionRequest {
        ConversionRequest {
            timezone: "UTC".to_string(),
            ..ConversionRequest::new(raw, mode)
        }
    }

    #[test]
    fn converted_report_lists_every_field() {
        let outcome = convert(&utc_request("1700000000", Mode::TimestampToDate), Language::En);
        let report = human_report(&outcome, Mode::TimestampToDate, Language::En);
        assert_eq!(
            report,
            "Result：2023-11-14 22:13:20\n\
             Seconds：1700000000\n\
             Milliseconds：1700000000000\n\
             UTC：2023-11-14 22:13:20 UTC\n"
        );
    }

    #[test]
    fn date_mode_also_shows_the_zoned_time() {
        let outcome = convert(
            &utc_request("2023-11-14 22:13:20", Mode::DateToTimestamp),
            Language::Zh,
        );
        let report = human_report(&outcome, Mode::DateToTimestamp, Language::Zh);
        assert!(report.starts_with("结果：1700000000000\n"));
        assert!(report.ends_with("时区时间：2023-11-14 22:13:20\n"));
    }

    #[test]
    fn failed_report_uses_placeholders() {
        let outcome = convert(&utc_request("not-a-date", Mode::DateToTimestamp), Language::Zh);
        let report = human_report(&outcome, Mode::DateToTimestamp, Language::Zh);
        assert_eq!(
            report,
            "结果：无法识别的时间格式\n\
             秒级时间戳：-\n\
             毫秒级时间戳：-\n\
             UTC 时间：-\n"
        );
    }

    #[test]
    fn hidden_report_is_empty() {
        assert!(human_report(&Outcome::Hidden, Mode::TimestampToDate, Language::En).is_empty());
    }
}
