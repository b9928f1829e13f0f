#![forbid(unsafe_code)]
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod cli_input;
mod compare;
mod errors;
mod output;

use clap::Parser;
use cli_input::{Args, Command, LogLevel, SchemaCommand};
use colored::control::ShouldColorize;
use errors::CliError;
use output::report;
use std::process;
use tracing_subscriber::EnvFilter;

const THRESHOLD_REACHED_EXIT_STATUS: i32 = 2;
const ERROR_EXIT_STATUS: i32 = 1;

fn main() {
    ShouldColorize::from_env();

    let exit_code = match try_main() {
        Ok(false) => 0,
        Ok(true) => THRESHOLD_REACHED_EXIT_STATUS,
        Err(error) => {
            report::error(&error);
            ERROR_EXIT_STATUS
        }
    };

    process::exit(exit_code);
}

fn try_main() -> Result<bool, CliError> {
    let args = Args::parse();

    init_tracing(args.log_level);

    match args.command {
        Command::Schema(SchemaCommand::Compare(command)) => compare::compare(command),
    }
}

fn init_tracing(log_level: Option<LogLevel>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.as_filter_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_filter_str())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}
