//! Exam Paper - command-line exam paper builder
//!
//! Loads a converted exam paper, applies an edit script, and renders,
//! exports or prints the result.

mod commands;
mod state;

use clap::{Parser, Subcommand};
use commands::{ExportArgs, IngestArgs, PrintArgs, RenderArgs, SettingsArgs};
use std::path::PathBuf;
use store::SettingsManager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build, rearrange and export exam papers
#[derive(Parser, Debug)]
#[command(name = "exam-paper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json
    #[arg(long, global = true, default_value = ".exam-paper")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a paper and write its normalized document JSON
    Ingest(IngestArgs),

    /// Render the paper markup in edit or view mode
    Render(RenderArgs),

    /// Export the finished paper as a Word document
    Export(ExportArgs),

    /// Write a printable page of the finished paper
    Print(PrintArgs),

    /// Show or reset the settings
    Settings(SettingsArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut manager = SettingsManager::new(cli.config_dir);
    let settings = manager.load().await?.clone();

    match cli.command {
        Command::Ingest(args) => commands::ingest(args, &settings).await,
        Command::Render(args) => commands::render(args, &settings).await,
        Command::Export(args) => commands::export(args, &settings).await,
        Command::Print(args) => commands::print(args, &settings).await,
        Command::Settings(args) => commands::settings(args, &mut manager),
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!("Using settings from {}", cli.config_dir.display());

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
