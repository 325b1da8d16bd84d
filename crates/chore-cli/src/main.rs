//! Chore CLI Application
//!
//! Command-line interface for the chore todo tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, ListArgs};
use chore_core::TodoFileBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        file,
        no_color,
        command,
    } = Args::parse();

    let file = TodoFileBuilder::new()
        .with_path(file)
        .build()
        .context("Failed to locate todo file")?;
    info!("Chore started with {}", file.path().display());

    let cli = Cli::new(file, TerminalRenderer::new(!no_color));

    match command {
        Some(command) => cli.handle(command),
        None => cli.list(&ListArgs::default()),
    }
}
