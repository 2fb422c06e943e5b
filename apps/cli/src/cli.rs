//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "reel",
    version,
    about = "Validate and submit forms described by TOML schemas"
)]
pub struct Cli {
    /// Log filter directives, e.g. `debug` or `reel_form=trace`.
    #[arg(long, global = true, env = "REEL_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, env = "REEL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a data file against a schema and print each field's first error.
    Check {
        /// Form schema (TOML).
        schema: PathBuf,
        /// Field values (JSON object).
        data: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the full submission lifecycle against an in-memory receiver.
    Submit {
        /// Form schema (TOML).
        schema: PathBuf,
        /// Field values (JSON object).
        data: PathBuf,
        /// Simulated receiver latency.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
        /// Make the receiver reject with this reason.
        #[arg(long)]
        reject: Option<String>,
        /// Keep failed submissions as drafts in this JSON file.
        #[arg(long)]
        drafts: Option<PathBuf>,
    },
    /// Format a phone number as it is typed (`0XXX XXX XX XX`).
    FormatPhone {
        /// Raw input.
        input: String,
    },
    /// Show a character counter reading.
    Counter {
        /// Character cap.
        max: usize,
        /// Text to count.
        text: String,
    },
    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for reel_log::Format {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}
