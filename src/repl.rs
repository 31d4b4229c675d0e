use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::converter::{Mode, Outcome};
use crate::report::human_report;
use crate::shell::Shell;
use crate::timestamp::{InputUnit, OutputUnit};

const HELP: &str = "\
:now                      use the current time
:mode timestamp|date      switch conversion direction
:tab                      toggle conversion direction
:tz ZONE                  IANA timezone or `local`
:unit auto|seconds|millis input unit (timestamp mode)
:out seconds|millis       output unit (date mode)
:show                     convert the current input again
:help                     show this help
:quit                     leave
anything else             convert it";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Now,
    Mode(Mode),
    Tab,
    Timezone(String),
    InputUnit(InputUnit),
    OutputUnit(OutputUnit),
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Ok(Command::Submit(trimmed.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "now" => Command::Now,
            "mode" => Command::Mode(parse_value(arg)?),
            "tab" => Command::Tab,
            "tz" if !arg.is_empty() => Command::Timezone(arg.to_string()),
            "unit" => Command::InputUnit(parse_value(arg)?),
            "out" => Command::OutputUnit(parse_value(arg)?),
            "show" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => bail!("未知命令：{trimmed}（输入 :help 查看帮助）"),
        };
        Ok(command)
    }
}

fn parse_value<T: ValueEnum>(arg: &str) -> Result<T> {
    T::from_str(arg, true).map_err(|err| anyhow::anyhow!("无效参数 {arg:?}：{err}"))
}

/// Applies one command to the shell. `None` means the session should end.
pub fn apply(shell: &mut Shell, command: Command, now: DateTime<Utc>) -> Option<Outcome> {
    let outcome = match command {
        Command::Submit(text) => shell.submit(&text),
        Command::Now => shell.set_now(now),
        Command::Mode(mode) => shell.switch_mode(mode, now),
        Command::Tab => shell.switch_mode(shell.mode().toggled(), now),
        Command::Timezone(zone) => shell.set_timezone(&zone),
        Command::InputUnit(unit) => shell.set_input_unit(unit),
        Command::OutputUnit(unit) => shell.set_output_unit(unit),
        Command::Show | Command::Help => shell.refresh(),
        Command::Quit => return None,
    };
    Some(outcome)
}

/// Runs the line-oriented session until `:quit` or end of input.
pub fn run_session<R, W, C>(shell: &mut Shell, input: R, mut output: W, mut clock: C) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> DateTime<Utc>,
{
    let initial = shell.set_now(clock());
    write!(output, "{}", human_report(&initial, shell.mode(), shell.language()))?;

    for line in input.lines() {
        let line = line.context("无法读取输入")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        tracing::debug!(?command, "interactive command");

        if command == Command::Help {
            writeln!(output, "{HELP}")?;
            continue;
        }

        match apply(shell, command, clock()) {
            Some(outcome) => {
                write!(output, "{}", human_report(&outcome, shell.mode(), shell.language()))?;
            }
            None => break,
        }
        output.flush()?;
    }

    Ok(())
}
