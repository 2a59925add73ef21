mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = config::Config::load()?;

    // Build the filter once; every command scans through the same instance.
    let filter = commands::build_filter(&cli, &config)?;
    let replacement = cli.replacement.unwrap_or(config.scan.replacement);

    match cli.command {
        cli::Commands::Scan { text, file, json } => {
            commands::scan::handle(&filter, text, file, replacement, json)
        }
        cli::Commands::Repl => commands::repl::handle(&filter, replacement),
        cli::Commands::Batch {
            input,
            output,
            json,
        } => commands::batch::handle(&filter, input, output, replacement, json),
    }
}
