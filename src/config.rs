use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::converter::Mode;
use crate::lang::Language;
use crate::timestamp::{InputUnit, OutputUnit};
use crate::zone::LOCAL;

const APP_DIR: &str = "tsconv";
const CONFIG_FILE: &str = "config.json";

/// Optional user preferences. Every field may be left out.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub timezone: Option<String>,
    pub mode: Option<Mode>,
    pub input_unit: Option<InputUnit>,
    pub output_unit: Option<OutputUnit>,
    pub language: Option<Language>,
}

/// Fully resolved preferences the shell starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timezone: String,
    pub mode: Mode,
    pub input_unit: InputUnit,
    pub output_unit: OutputUnit,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timezone: LOCAL.to_string(),
            mode: Mode::default(),
            input_unit: InputUnit::default(),
            output_unit: OutputUnit::default(),
            language: Language::default(),
        }
    }
}

impl Settings {
    pub fn from_file(config: FileConfig) -> Self {
        let defaults = Settings::default();
        Settings {
            timezone: config.timezone.unwrap_or(defaults.timezone),
            mode: config.mode.unwrap_or(defaults.mode),
            input_unit: config.input_unit.unwrap_or(defaults.input_unit),
            output_unit: config.output_unit.unwrap_or(defaults.output_unit),
            language: config.language.unwrap_or(defaults.language),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    let mut dir = dirs::config_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.push(APP_DIR);
    dir.push(CONFIG_FILE);
    dir
}

/// Reads the config file at `path`. A missing file yields the defaults;
/// an explicitly requested file must exist.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (default_config_path(), false),
    };

    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FileConfig::default());
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("无法读取配置文件：{}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&data)
        .with_context(|| format!("配置文件格式错误：{}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_means_defaults() {
        let config: FileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(Settings::from_file(config), Settings::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let config: FileConfig = serde_json::from_str(
            r#"{
                "timezone": "Asia/Shanghai",
                "mode": "date",
                "input_unit": "seconds",
                "output_unit": "seconds",
                "language": "en"
            }"#,
        )
        .unwrap();
        let settings = Settings::from_file(config);
        assert_eq!(settings.timezone, "Asia/Shanghai");
        assert_eq!(settings.mode, Mode::DateToTimestamp);
        assert_eq!(settings.input_unit, InputUnit::Seconds);
        assert_eq!(settings.output_unit, OutputUnit::Seconds);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<FileConfig>(r#"{"history": []}"#).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("tsconv-definitely-missing.json");
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn default_path_ends_with_app_file() {
        let path = default_config_path();
        assert!(path.ends_with("tsconv/config.json"));
    }
}
