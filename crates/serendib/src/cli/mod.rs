//! Command-line interface for serendib.
//!
//! This module provides the CLI structure and command definitions for the
//! `serendib` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BookCommand, ConfigCommand, LogCommand, LogSourceArg};

/// serendib - booking flow core and dev-log tooling
///
/// Runs the booking submission flow from the command line and maintains the
/// size-bounded browser debug log sinks written by the dev server.
#[derive(Debug, Parser)]
#[command(name = "serendib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the booking flow with the given form fields
    Book(BookCommand),

    /// Inspect and maintain the dev-log sinks
    #[command(subcommand)]
    Log(LogCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "serendib");
    }

    #[test]
    fn test_parse_book() {
        let args = vec![
            "serendib",
            "book",
            "--name",
            "Asha",
            "--destination",
            "Ella",
            "--date",
            "2026-04-01",
            "--guests",
            "2",
            "--email",
            "a@x.com",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Book(cmd) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(cmd.name, "Asha");
        assert_eq!(cmd.guests, 2);
    }

    #[test]
    fn test_parse_log_write() {
        let args = vec!["serendib", "log", "write", "browser-console"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Log(LogCommand::Write {
                source: LogSourceArg::BrowserConsole
            })
        ));
    }

    #[test]
    fn test_parse_log_tail_with_line_count() {
        let args = vec!["serendib", "log", "tail", "network-requests", "-n", "5"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Log(LogCommand::Tail { source, lines }) = cli.command else {
            panic!("expected tail command");
        };
        assert_eq!(source, LogSourceArg::NetworkRequests);
        assert_eq!(lines, 5);
    }

    #[test]
    fn test_parse_log_trim_all_sources() {
        let args = vec!["serendib", "log", "trim"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Log(LogCommand::Trim { source: None })
        ));
    }

    #[test]
    fn test_parse_config_path() {
        let args = vec!["serendib", "config", "path"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config_file() {
        let args = vec!["serendib", "-c", "/custom/config.toml", "log", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_flags() {
        let quiet = Cli::try_parse_from(vec!["serendib", "-q", "log", "status"]).unwrap();
        assert_eq!(quiet.verbosity(), crate::logging::Verbosity::Quiet);

        let normal = Cli::try_parse_from(vec!["serendib", "log", "status"]).unwrap();
        assert_eq!(normal.verbosity(), crate::logging::Verbosity::Normal);

        let verbose = Cli::try_parse_from(vec!["serendib", "-v", "log", "status"]).unwrap();
        assert_eq!(verbose.verbosity(), crate::logging::Verbosity::Verbose);

        let trace = Cli::try_parse_from(vec!["serendib", "-vv", "log", "status"]).unwrap();
        assert_eq!(trace.verbosity(), crate::logging::Verbosity::Trace);
    }
}
