use std::io;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsconv::cli::Cli;
use tsconv::config;
use tsconv::converter::Outcome;
use tsconv::repl::run_session;
use tsconv::report::{print_human_report, print_json_report};
use tsconv::shell::Shell;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = config::load(cli.config.as_deref())?;
    let settings = cli.settings(file);
    tracing::debug!(?settings, "resolved settings");
    let mut shell = Shell::new(&settings);

    if cli.interactive {
        let stdin = io::stdin();
        run_session(&mut shell, stdin.lock(), io::stdout(), Utc::now)?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = match cli.input.as_deref() {
        Some(input) if !cli.wants_now() => shell.submit(input),
        _ => shell.set_now(Utc::now()),
    };

    if cli.json {
        print_json_report(&outcome)?;
    } else {
        print_human_report(&outcome, shell.mode(), shell.language());
    }

    Ok(match outcome {
        Outcome::Failed(_) => ExitCode::FAILURE,
        Outcome::Hidden | Outcome::Converted(_) => ExitCode::SUCCESS,
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
