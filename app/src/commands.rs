//! Subcommand handlers

use crate::state::{load_script, PaperSession};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use render_model::RenderMode;
use std::path::{Path, PathBuf};
use store::{
    AppSettings, FileConversionService, FilePrintHost, IngestionController, PrintHost,
    SettingsManager, SourceFile,
};

#[derive(Debug, Args)]
pub struct PaperArgs {
    /// Source paper: a PDF with a converted payload, or a converted JSON payload
    pub source: PathBuf,

    /// Edit script applied after loading (JSON array of steps)
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct IngestArgs {
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Write the document JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Edit,
    View,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Edit => RenderMode::Edit,
            ModeArg::View => RenderMode::View,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Render mode
    #[arg(short, long, value_enum, default_value = "edit")]
    pub mode: ModeArg,

    /// Write the markup here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Directory to write the document into
    #[arg(short = 'd', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// File name (overrides settings)
    #[arg(long)]
    pub file_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct PrintArgs {
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Where to write the printable page
    #[arg(short, long, default_value = "exam_paper_print.html")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Restore and save the default settings
    #[arg(long)]
    pub reset: bool,
}

/// Ingest the source paper and apply the edit script, if any
pub async fn load_session(paper: &PaperArgs, settings: &AppSettings) -> Result<PaperSession> {
    let service = FileConversionService::new(&settings.service.payload_dir);
    let controller = IngestionController::new(
        service,
        settings.default_header.clone(),
        settings.service.timeout(),
    );

    let source = SourceFile::read(&paper.source)
        .await
        .with_context(|| format!("Failed to read {}", paper.source.display()))?;
    let document = controller
        .load(source)
        .await
        .with_context(|| format!("Failed to ingest {}", paper.source.display()))?;

    let mut session = PaperSession::new(document);
    if let Some(script) = &paper.script {
        let steps = load_script(script)?;
        session.run_script(&steps)?;
    }
    Ok(session)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

pub async fn ingest(args: IngestArgs, settings: &AppSettings) -> Result<()> {
    let session = load_session(&args.paper, settings).await?;
    let document = session.close();
    let json = serde_json::to_string_pretty(&document)?;
    write_output(args.output.as_deref(), &json)
}

pub async fn render(args: RenderArgs, settings: &AppSettings) -> Result<()> {
    let mut session = load_session(&args.paper, settings).await?;
    if session.mode() != RenderMode::from(args.mode) {
        session.toggle_mode();
    }
    let markup = session.render();
    session.close();
    write_output(args.output.as_deref(), &markup)
}

pub async fn export(args: ExportArgs, settings: &AppSettings) -> Result<()> {
    let session = load_session(&args.paper, settings).await?;
    let file_name = args
        .file_name
        .as_deref()
        .unwrap_or(settings.export.file_name.as_str());
    let artifact = session.export(file_name);
    session.close();

    let path = artifact
        .write_to_async(&args.out_dir)
        .await
        .with_context(|| format!("Failed to export into {}", args.out_dir.display()))?;
    println!("{}", path.display());
    Ok(())
}

pub async fn print(args: PrintArgs, settings: &AppSettings) -> Result<()> {
    let session = load_session(&args.paper, settings).await?;
    let page = session.printable(&settings.print.layout());
    session.close();

    let host = FilePrintHost::new(&args.output);
    host.print(&page)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("{}", host.path().display());
    Ok(())
}

pub fn settings(args: SettingsArgs, manager: &mut SettingsManager) -> Result<()> {
    if args.reset {
        manager.reset_sync()?;
        tracing::info!("Settings reset at {}", manager.settings_path().display());
    }
    println!("{}", serde_json::to_string_pretty(manager.get())?);
    Ok(())
}
