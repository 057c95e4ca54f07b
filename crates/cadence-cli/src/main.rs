//! Cadence CLI Application
//!
//! Command-line interface for the Cadence release planning console.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, TimelineArgs};
use cadence_core::ConsoleBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        shop,
        command,
    } = Args::parse();

    let console = ConsoleBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize console")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(console, renderer, shop);

    info!("Cadence started");

    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Timeline(args)) => cli.timeline(args).await,
        Some(Commands::Diff(args)) => cli.diff(args).await,
        None => cli.timeline(TimelineArgs::default()).await,
    }
}
