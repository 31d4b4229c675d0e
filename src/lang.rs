use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FormattingFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

/// Field captions used by the human report.
pub struct Labels {
    pub result: &'static str,
    pub seconds: &'static str,
    pub millis: &'static str,
    pub utc: &'static str,
    pub localized: &'static str,
}

impl Language {
    pub fn unrecognized_format(self) -> &'static str {
        match self {
            Language::Zh => "无法识别的时间格式",
            Language::En => "unrecognized time format",
        }
    }

    pub fn formatting_error(self, failure: &FormattingFailure) -> String {
        match (self, failure) {
            (Language::Zh, FormattingFailure::UnknownTimezone(id)) => {
                format!("格式化错误: 未知时区 {id}")
            }
            (Language::En, FormattingFailure::UnknownTimezone(id)) => {
                format!("formatting error: unknown timezone {id}")
            }
        }
    }

    pub fn labels(self) -> Labels {
        match self {
            Language::Zh => Labels {
                result: "结果",
                seconds: "秒级时间戳",
                millis: "毫秒级时间戳",
                utc: "UTC 时间",
                localized: "时区时间",
            },
            Language::En => Labels {
                result: "Result",
                seconds: "Seconds",
                millis: "Milliseconds",
                utc: "UTC",
                localized: "Zoned time",
            },
        }
    }
}
