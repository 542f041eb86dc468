//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::repl;
use super::ui::ConsoleUi;
use crate::storage::{Config, Database};

#[derive(Parser)]
#[command(name = "tusk")]
#[command(author, version, about = "A conversational task manager for your terminal")]
pub struct Cli {
    /// Task file to use (overrides the configured data_file)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Read settings from this config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Plain output: no colors, no typing effect (useful for scripts)
    #[arg(long)]
    pub plain: bool,
}

/// Parses arguments, resolves configuration and runs a session over
/// standard input.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let data_file = cli.file.clone().unwrap_or_else(|| config.data_file.clone());
    let color = config.color && !cli.plain;
    let typing_delay_ms = if cli.plain { 0 } else { config.typing_delay_ms };

    let mut ui = ConsoleUi::new(color, typing_delay_ms);
    repl::run(Database::new(data_file), &mut ui, io::stdin().lock())
}
