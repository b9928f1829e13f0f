use clap::ValueEnum;
use std::fmt;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    #[default]
    Off,
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warning and error messages
    Info,
    /// Debug, info, warning and error messages, including a summary of each comparison
    Debug,
    /// Everything, including every detected change as it is found
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "gqlcompare=error,graphql_schema_compare=error,off",
            LogLevel::Warn => "gqlcompare=warn,graphql_schema_compare=warn,off",
            LogLevel::Info => "gqlcompare=info,graphql_schema_compare=info,off",
            LogLevel::Debug => "gqlcompare=debug,graphql_schema_compare=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
