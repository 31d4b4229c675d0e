use std::path::PathBuf;

use clap::Parser;

use crate::config::{FileConfig, Settings};
use crate::converter::Mode;
use crate::lang::Language;
use crate::timestamp::{InputUnit, OutputUnit};

#[derive(Parser, Debug)]
#[command(
    name = "tsconv",
    version,
    about = "时间戳与日期互转：输入时间戳得到日期，或输入日期得到时间戳。"
)]
pub struct Cli {
    /// Timestamp or date text to convert (defaults to the current time)
    #[arg(value_name = "INPUT", allow_negative_numbers = true)]
    pub input: Option<String>,

    /// Conversion direction
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Unit of a numeric input in timestamp mode
    #[arg(long, value_enum, value_name = "UNIT")]
    pub unit: Option<InputUnit>,

    /// Unit of the emitted value in date mode
    #[arg(long = "output-unit", value_enum, value_name = "UNIT")]
    pub output_unit: Option<OutputUnit>,

    /// IANA timezone for the formatted date, or `local`
    #[arg(long = "tz", value_name = "ZONE")]
    pub timezone: Option<String>,

    /// Convert the current instant instead of INPUT
    #[arg(long, conflicts_with = "input")]
    pub now: bool,

    /// Output JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// 消息语言
    #[arg(long, value_enum, value_name = "LANG")]
    pub lang: Option<Language>,

    /// 交互模式：逐行输入，支持 :now / :mode / :tz 等命令
    #[arg(long, short = 'i', conflicts_with_all = ["input", "now"])]
    pub interactive: bool,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Layers command-line flags over the config file.
    pub fn settings(&self, file: FileConfig) -> Settings {
        let mut settings = Settings::from_file(file);
        if let Some(ref timezone) = self.timezone {
            settings.timezone = timezone.clone();
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(unit) = self.unit {
            settings.input_unit = unit;
        }
        if let Some(unit) = self.output_unit {
            settings.output_unit = unit;
        }
        if let Some(lang) = self.lang {
            settings.language = lang;
        }
        settings
    }

    /// Whether the current instant should be converted.
    pub fn wants_now(&self) -> bool {
        self.now || self.input.is_none()
    }
}
