// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use homematic_rega::{RegaClient, RegaConfig};

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a rega script from a file and print its output
    Exec {
        /// Path to the script file
        script_path: PathBuf,
    },

    /// List all devices and channels
    Channels,

    /// List current datapoint values
    Values,

    /// List all programs
    Programs,

    /// List all system variables
    Variables,

    /// List all rooms
    Rooms,

    /// List all functions
    Functions,

    /// Set a system variable value (parsed as a JSON literal, everything
    /// else is taken as a string)
    SetVariable {
        /// Object id of the variable
        id: u64,
        /// New value
        value: String,
    },

    /// Start a program
    StartProgram {
        /// Object id of the program
        id: u64,
    },

    /// Activate or deactivate a program
    SetProgram {
        /// Object id of the program
        id: u64,
        /// true to activate, false to deactivate
        #[arg(action = clap::ArgAction::Set)]
        active: bool,
    },

    /// Rename an object
    Rename {
        /// Object id
        id: u64,
        /// New name
        name: String,
    },
}

/// homematic-rega
///
/// Run rega scripts against a HomeMatic CCU and query its devices,
/// programs, rooms, functions and system variables.
#[derive(Parser, Debug)]
#[command(name = "homematic-rega")]
#[command(about = "rega script client for the HomeMatic CCU")]
struct CommandLineOptions {
    /// Hostname or IP address of the CCU
    #[arg(short = 'H', long)]
    host: String,

    /// Remote script port
    #[arg(short, long, default_value_t = 8181)]
    port: u16,

    /// WebUI language used for placeholder translation
    #[arg(short, long, default_value = "de")]
    language: String,

    /// Disable placeholder translation
    #[arg(short = 'T', long)]
    disable_translation: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Set logging level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: Commands,
}

// @struct: Minimal stderr logger
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(stderr, "\x1B[1;31m{} {}\x1B[0m", now, record.args())
                }
                Level::Warn => {
                    writeln!(stderr, "\x1B[1;33m{} {}\x1B[0m", now, record.args())
                }
                _ => writeln!(stderr, "{} {}", now, record.args()),
            };
        }
    }

    fn flush(&self) {}
}

fn print_json<T: serde::Serialize>(records: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();
    CustomLogger::init(options.log_level.clone().into())
        .context("failed to install logger")?;

    let config = RegaConfig::new(&options.host)
        .with_port(options.port)
        .with_language(&options.language)
        .with_translation_disabled(options.disable_translation)
        .with_timeout_secs(options.timeout_secs);
    let client = RegaClient::new(config)?;

    match options.command {
        Commands::Exec { script_path } => {
            let script = std::fs::read_to_string(&script_path)
                .with_context(|| format!("cannot read {}", script_path.display()))?;
            let response = client.exec(&script).await?;
            if !response.output.is_empty() {
                println!("{}", response.output);
            }
            print_json(&response.document)?;
        }
        Commands::Channels => print_json(&client.channels().await?)?,
        Commands::Values => print_json(&client.values().await?)?,
        Commands::Programs => print_json(&client.programs().await?)?,
        Commands::Variables => print_json(&client.variables().await?)?,
        Commands::Rooms => print_json(&client.rooms().await?)?,
        Commands::Functions => print_json(&client.functions().await?)?,
        Commands::SetVariable { id, value } => {
            let value = serde_json::from_str(&value)
                .unwrap_or(serde_json::Value::String(value));
            client.set_variable(id, value).await?;
        }
        Commands::StartProgram { id } => {
            client.start_program(id).await?;
        }
        Commands::SetProgram { id, active } => {
            client.set_program_active(id, active).await?;
        }
        Commands::Rename { id, name } => {
            client.rename_object(id, &name).await?;
        }
    }
    Ok(())
}
