mod log;

pub(crate) use log::LogLevel;

use clap::{Parser, Subcommand, ValueEnum};
use graphql_schema_compare::{DiffResult, Level};
use std::{fmt, path::PathBuf};

#[derive(Debug, Parser)]
#[command(name = "gqlcompare", version)]
#[command(arg_required_else_help = true)]
/// Compare GraphQL schemas and classify the changes between them
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Set the logging level. Logs are written to stderr. Defaults to the RUST_LOG environment
    /// variable, or no logs at all.
    #[arg(long = "log", env = "GQLCOMPARE_LOG", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Schema related commands
    #[command(subcommand)]
    Schema(SchemaCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum SchemaCommand {
    /// Compare two schemas and list the changes from the first one to the second one
    Compare(CompareCommand),
}

#[derive(Debug, clap::Args)]
pub(crate) struct CompareCommand {
    /// Path to the schema to compare from, usually the one currently deployed
    pub source: PathBuf,
    /// Path to the schema to compare to
    pub target: PathBuf,
    /// Format of the two schemas
    #[arg(short, long = "input-format", default_value_t = InputFormat::Sdl)]
    pub input_format: InputFormat,
    /// Format of the list of changes
    #[arg(short, long = "output-format", default_value_t = OutputFormat::Txt)]
    pub output_format: OutputFormat,
    /// Exit with a non-zero status when a change reaches this severity
    #[arg(long, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
    /// Do not report description changes
    #[arg(long)]
    pub ignore_descriptions: bool,
    /// Also report the fields, values and members of added types
    #[arg(long)]
    pub verbose_additions: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputFormat {
    /// GraphQL schema definition language
    Sdl,
}

impl AsRef<str> for InputFormat {
    fn as_ref(&self) -> &str {
        match self {
            InputFormat::Sdl => "sdl",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// An aligned table, followed by a summary on stderr
    Txt,
    /// A JSON array of changes, for scripting
    Json,
}

impl AsRef<str> for OutputFormat {
    fn as_ref(&self) -> &str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum FailOn {
    /// Always exit successfully
    Never,
    /// Fail on dangerous or breaking changes
    Dangerous,
    /// Fail on breaking changes
    Breaking,
}

impl FailOn {
    pub(crate) fn is_reached_by(self, result: &DiffResult) -> bool {
        match (self, result.worst_level()) {
            (FailOn::Never, _) | (_, None | Some(Level::NonBreaking)) => false,
            (FailOn::Dangerous, Some(_)) => true,
            (FailOn::Breaking, Some(level)) => level == Level::Breaking,
        }
    }
}

impl AsRef<str> for FailOn {
    fn as_ref(&self) -> &str {
        match self {
            FailOn::Never => "never",
            FailOn::Dangerous => "dangerous",
            FailOn::Breaking => "breaking",
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
