//! `serendib` - CLI for the booking flow core and dev-log tooling
//!
//! This binary runs the booking submission flow from the command line and
//! maintains the size-bounded browser debug log sinks.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, BufRead};

use clap::Parser;

use serendib::booking::{BookingFlow, BookingPayload, FormCollector, Navigator, View};
use serendib::cli::{BookCommand, Cli, Command, ConfigCommand, LogCommand};
use serendib::devlog::{LogSource, LogWriter};
use serendib::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Book(cmd) => handle_book(&config, cmd),
        Command::Log(cmd) => handle_log(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Form collector fed from command-line flags.
#[derive(Debug)]
struct FlagFormCollector {
    payload: Option<BookingPayload>,
}

impl FormCollector for FlagFormCollector {
    fn collect(&mut self, on_submit: &mut dyn FnMut(BookingPayload)) {
        if let Some(payload) = self.payload.take() {
            on_submit(payload);
        }
    }
}

/// Navigation service for a terminal session: announces the route change.
#[derive(Debug)]
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate_to(&self, route: &str) {
        println!("Navigating to {route}");
    }
}

fn handle_book(config: &Config, cmd: BookCommand) -> anyhow::Result<()> {
    let mut flow = BookingFlow::with_home_route(&config.booking.home_route);
    let mut collector = FlagFormCollector {
        payload: Some(BookingPayload {
            name: cmd.name,
            destination: cmd.destination,
            date: cmd.date,
            guests: cmd.guests,
            email: cmd.email,
        }),
    };
    flow.collect_from(&mut collector);

    match flow.render() {
        View::Confirmation(view) => {
            println!("{view}");
            view.go_home(&TerminalNavigator);
        }
        View::Collecting => println!("No booking submitted."),
    }
    Ok(())
}

fn handle_log(config: &Config, cmd: &LogCommand) -> anyhow::Result<()> {
    let writer = LogWriter::new(config.log_writer_config());

    match cmd {
        LogCommand::Write { source } => {
            let source = LogSource::from(*source);
            let mut entries = Vec::new();
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<serde_json::Value>(&line) {
                    Ok(value) => entries.push(value),
                    Err(err) => eprintln!("skipping invalid JSON: {err}"),
                }
            }
            writer.write(source, &entries);
            println!(
                "Appended {} entries to {}",
                entries.len(),
                writer.sink_path(source).display()
            );
        }
        LogCommand::Tail { source, lines } => {
            let source = LogSource::from(*source);
            match std::fs::read_to_string(writer.sink_path(source)) {
                Ok(content) => {
                    let all: Vec<&str> = content.lines().collect();
                    let start = all.len().saturating_sub(*lines);
                    for line in &all[start..] {
                        println!("{line}");
                    }
                }
                Err(_) => println!("{source}: sink is empty"),
            }
        }
        LogCommand::Trim { source } => {
            let targets: Vec<LogSource> = match source {
                Some(arg) => vec![(*arg).into()],
                None => LogSource::ALL.to_vec(),
            };
            for target in targets {
                writer.trim(target);
                let status = writer.status(target);
                println!(
                    "{target}: {} bytes, {} lines",
                    status.size_bytes, status.line_count
                );
            }
        }
        LogCommand::Status { json } => {
            let statuses = writer.status_all();
            if *json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                for status in &statuses {
                    println!(
                        "{:<16} {:>10} bytes  {:>6} lines  {}{}",
                        status.source.to_string(),
                        status.size_bytes,
                        status.line_count,
                        status.path.display(),
                        if status.over_cap { "  (over cap)" } else { "" }
                    );
                }
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Devlog]");
                println!("  Sink directory:     {}", config.devlog_dir().display());
                println!(
                    "  Max sink size:      {} bytes",
                    config.devlog.max_sink_bytes
                );
                println!(
                    "  Retention fraction: {}",
                    config.devlog.retention_fraction
                );
                println!();
                println!("[Booking]");
                println!("  Home route:         {}", config.booking.home_route);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
