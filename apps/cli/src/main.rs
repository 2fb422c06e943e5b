//! `reel`: validate and submit forms described by TOML schemas.

mod cli;
mod commands;
mod console;
mod loader;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::SubmitOptions;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = reel_log::Config::from_env()
        .with_level(cli.log_level.clone())
        .with_format(cli.log_format.into());
    let _log = match reel_log::init_with(config) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Check { schema, data, json } => commands::check(&schema, &data, json),
        Command::Submit {
            schema,
            data,
            delay_ms,
            reject,
            drafts,
        } => {
            let options = SubmitOptions {
                delay: Duration::from_millis(delay_ms),
                reject,
                drafts,
            };
            commands::submit(&schema, &data, options).await
        }
        Command::FormatPhone { input } => {
            commands::format_phone(&input);
            Ok(ExitCode::SUCCESS)
        }
        Command::Counter { max, text } => {
            commands::counter(max, &text);
            Ok(ExitCode::SUCCESS)
        }
        Command::Completions { shell } => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}
