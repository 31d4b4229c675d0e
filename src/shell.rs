use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::converter::{ConversionRequest, Mode, Outcome, convert, format_wall_clock};
use crate::lang::Language;
use crate::timestamp::{InputUnit, Instant, OutputUnit};
use crate::zone::Zone;

/// Raw text typed into each mode, kept across mode switches.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SavedInputs {
    pub timestamp: String,
    pub date: String,
}

impl SavedInputs {
    pub fn get(&self, mode: Mode) -> &str {
        match mode {
            Mode::TimestampToDate => &self.timestamp,
            Mode::DateToTimestamp => &self.date,
        }
    }

    fn set(&mut self, mode: Mode, value: String) {
        match mode {
            Mode::TimestampToDate => self.timestamp = value,
            Mode::DateToTimestamp => self.date = value,
        }
    }
}

/// Session state of the front end. Every mutating action re-runs the
/// conversion and returns what should be shown.
#[derive(Debug, Clone)]
pub struct Shell {
    mode: Mode,
    inputs: SavedInputs,
    timezone: String,
    input_unit: InputUnit,
    output_unit: OutputUnit,
    language: Language,
}

impl Shell {
    pub fn new(settings: &Settings) -> Self {
        Shell {
            mode: settings.mode,
            inputs: SavedInputs::default(),
            timezone: settings.timezone.clone(),
            input_unit: settings.input_unit,
            output_unit: settings.output_unit,
            language: settings.language,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        self.inputs.get(self.mode)
    }

    pub fn saved_inputs(&self) -> &SavedInputs {
        &self.inputs
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn input_unit(&self) -> InputUnit {
        self.input_unit
    }

    pub fn output_unit(&self) -> OutputUnit {
        self.output_unit
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            raw_input: self.input().to_string(),
            mode: self.mode,
            input_unit: self.input_unit,
            output_unit: self.output_unit,
            timezone: self.timezone.clone(),
        }
    }

    /// Converts the current input without changing any state.
    pub fn refresh(&self) -> Outcome {
        convert(&self.request(), self.language)
    }

    pub fn submit(&mut self, raw: &str) -> Outcome {
        self.inputs.set(self.mode, raw.trim().to_string());
        self.refresh()
    }

    /// Replaces the current input with `now`. In timestamp mode the input
    /// becomes epoch milliseconds and the input unit switches to millis.
    ///
    /// In date mode the input is the wall-clock text of `now`, which is
    /// parsed back like typed text. Inside the repeated hour after clocks
    /// go back it therefore resolves to the earlier of the two instants, up
    /// to an hour before `now`.
    pub fn set_now(&mut self, now: DateTime<Utc>) -> Outcome {
        if self.mode == Mode::TimestampToDate {
            self.input_unit = InputUnit::Millis;
        }
        let text = self.now_text(now);
        self.inputs.set(self.mode, text);
        self.refresh()
    }

    /// Switches mode, restoring that mode's saved input or defaulting it to
    /// `now` when nothing was typed there yet.
    pub fn switch_mode(&mut self, mode: Mode, now: DateTime<Utc>) -> Outcome {
        self.mode = mode;
        if self.input().is_empty() {
            return self.set_now(now);
        }
        self.refresh()
    }

    pub fn set_timezone(&mut self, timezone: &str) -> Outcome {
        self.timezone = timezone.trim().to_string();
        self.refresh()
    }

    pub fn set_input_unit(&mut self, unit: InputUnit) -> Outcome {
        self.input_unit = unit;
        self.refresh()
    }

    pub fn set_output_unit(&mut self, unit: OutputUnit) -> Outcome {
        self.output_unit = unit;
        self.refresh()
    }

    fn now_text(&self, now: DateTime<Utc>) -> String {
        match self.mode {
            Mode::TimestampToDate => now.timestamp_millis().to_string(),
            Mode::DateToTimestamp => match Instant::from_datetime(&now) {
                Some(instant) => {
                    let zone = Zone::resolve_or_local(&self.timezone);
                    format_wall_clock(&zone.wall_clock(&instant))
                }
                None => String::new(),
            },
        }
    }
}
