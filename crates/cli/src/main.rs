mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Parse { input, report } => {
            let text = commands::read_input(&input)?;
            commands::parse(&config, &text, report)
        }
        Command::Assign { items, categories } => {
            let json = commands::read_input(&items)?;
            commands::assign(&json, &categories)
        }
        Command::Split { input } => {
            let json = commands::read_input(&input)?;
            commands::split_json(&config, &json)
        }
        Command::Summary { input } => {
            let json = commands::read_input(&input)?;
            commands::summary(&config, &json)
        }
        Command::Dialects => Ok(commands::dialects(&config)),
    }
}
