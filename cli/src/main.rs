//! resumark CLI - resume markdown import and PDF export

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use resumark::{export_filename, ExportOptions, PdfExporter, SurfaceSnapshot};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(version)]
#[command(about = "Import markdown resumes and export captured surfaces to PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a markdown resume into a structured JSON record
    Import {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export a captured surface snapshot to a paginated PDF
    Export {
        /// Snapshot manifest (JSON + PNG files next to it)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Output PDF file; defaults to <name>-<Month>-<Year>.pdf
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document name used for the default output filename
        #[arg(long, default_value = "resume")]
        name: String,

        /// Rasterization oversampling factor
        #[arg(long, default_value = "2.0")]
        oversample: f32,

        /// Page-count safety cap
        #[arg(long, default_value = "20")]
        max_pages: u32,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { input, output } => run_import(input, output),
        Commands::Export {
            snapshot,
            output,
            name,
            oversample,
            max_pages,
        } => run_export(snapshot, output, &name, oversample, max_pages),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_import(input: PathBuf, output: Option<PathBuf>) -> resumark::Result<()> {
    let record = resumark::import_markdown_file(&input)?;
    let json = serde_json::to_string_pretty(&record)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!(
                "{} {} -> {}",
                "imported".green().bold(),
                input.display(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_export(
    snapshot_path: PathBuf,
    output: Option<PathBuf>,
    name: &str,
    oversample: f32,
    max_pages: u32,
) -> resumark::Result<()> {
    let snapshot = SurfaceSnapshot::load(&snapshot_path)?;
    let options = ExportOptions::new()
        .with_oversample(oversample)
        .with_max_pages(max_pages);

    let output = output.unwrap_or_else(|| PathBuf::from(export_filename(name, "pdf")));
    PdfExporter::new(options).export_to_file(&snapshot, &output)?;

    eprintln!(
        "{} {} -> {}",
        "exported".green().bold(),
        snapshot_path.display(),
        output.display()
    );
    Ok(())
}
