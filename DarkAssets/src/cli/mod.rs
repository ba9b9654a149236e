//! `DarkAssets` CLI - run the pre-build step from a shell or build script

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "darkassets")]
#[command(version, about = "DarkAssets: light/dark asset catalog generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the `DarkAssets` CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
