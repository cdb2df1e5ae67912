//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::devlog::LogSource;

/// Book command arguments: the form fields of one booking.
#[derive(Debug, Args)]
pub struct BookCommand {
    /// Guest name
    #[arg(long)]
    pub name: String,

    /// Destination of the tour
    #[arg(long)]
    pub destination: String,

    /// Travel date (as entered on the form, e.g. 2026-04-01)
    #[arg(long)]
    pub date: String,

    /// Number of guests
    #[arg(long, default_value = "1")]
    pub guests: u32,

    /// Contact email address
    #[arg(long)]
    pub email: String,
}

/// Dev-log maintenance commands.
#[derive(Debug, Subcommand)]
pub enum LogCommand {
    /// Append JSON entries from stdin (one value per line) to a sink
    Write {
        /// The sink to append to
        source: LogSourceArg,
    },

    /// Print the newest lines of a sink
    Tail {
        /// The sink to read
        source: LogSourceArg,

        /// Number of lines to print
        #[arg(short = 'n', long, default_value = "20")]
        lines: usize,
    },

    /// Force a trim pass on one sink, or all sinks
    Trim {
        /// The sink to trim (all sinks when omitted)
        source: Option<LogSourceArg>,
    },

    /// Show per-sink size and line counts
    Status {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Log source argument for sink selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogSourceArg {
    /// Captured browser console output
    BrowserConsole,
    /// Captured network request/response summaries
    NetworkRequests,
    /// Captured session replay events
    SessionReplay,
}

impl From<LogSourceArg> for LogSource {
    fn from(arg: LogSourceArg) -> Self {
        match arg {
            LogSourceArg::BrowserConsole => Self::BrowserConsole,
            LogSourceArg::NetworkRequests => Self::NetworkRequests,
            LogSourceArg::SessionReplay => Self::SessionReplay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_source_arg_conversion() {
        assert_eq!(
            LogSource::from(LogSourceArg::BrowserConsole),
            LogSource::BrowserConsole
        );
        assert_eq!(
            LogSource::from(LogSourceArg::NetworkRequests),
            LogSource::NetworkRequests
        );
        assert_eq!(
            LogSource::from(LogSourceArg::SessionReplay),
            LogSource::SessionReplay
        );
    }

    #[test]
    fn test_book_command_debug() {
        let cmd = BookCommand {
            name: "Asha".to_string(),
            destination: "Ella".to_string(),
            date: "2026-04-01".to_string(),
            guests: 2,
            email: "a@x.com".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("destination"));
        assert!(debug_str.contains("Ella"));
    }

    #[test]
    fn test_log_command_debug() {
        let cmd = LogCommand::Tail {
            source: LogSourceArg::BrowserConsole,
            lines: 20,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Tail"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
