mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use ramsav_core::ReaderConfig;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

/// Tracing target of the binary crate, named after the executable
const LOG_TARGET: &str = "ram2sav";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("{}={}", LOG_TARGET, level).parse()?)
                .add_directive(format!("ramsav_core={}", level).parse()?),
        )
        .with_target(false)
        .init();

    let config = ReaderConfig::builder()
        .filename_rule(cli.filename_rule)
        .build();

    match cli.command {
        Command::Convert { input, output } => {
            commands::convert::run(&input, output.as_deref(), &config)
        }
        Command::Inspect { input, json } => commands::inspect::run(&input, json.as_deref(), &config),
        Command::Locate {
            input,
            magic,
            occurrence,
            start,
            all,
            limit,
        } => commands::locate::run(&input, &magic, occurrence, &start, all, limit),
    }
}
