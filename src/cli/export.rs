//! CLI commands for data export
//!
//! Provides commands for exporting the catalog in various formats.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};
use crate::export::{self, CatalogExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-friendly book list)
    Csv,
    /// JSON format (full catalog)
    Json,
    /// YAML format (full catalog, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the catalog to a file, or to stdout when no file is given
    All {
        /// Output file path
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CatalogResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => match output {
            Some(path) => {
                let mut writer = create_output(&path)?;
                write_export(storage, &mut writer, format, pretty)?;
                writer
                    .flush()
                    .map_err(|e| CatalogError::Export(e.to_string()))?;
                println!("Catalog exported to: {}", path.display());
                Ok(())
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                write_export(storage, &mut writer, format, pretty)
            }
        },
        ExportCommands::Info => handle_export_info(storage),
    }
}

fn create_output(path: &Path) -> CatalogResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        CatalogError::Export(format!(
            "Failed to create file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn write_export<W: Write>(
    storage: &Storage,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> CatalogResult<()> {
    match format {
        ExportFormat::Csv => export::export_books_csv(storage, writer),
        ExportFormat::Json => export::export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => export::export_full_yaml(storage, writer),
    }
}

/// Show export information
fn handle_export_info(storage: &Storage) -> CatalogResult<()> {
    let export = CatalogExport::from_storage(storage)?;

    println!("Export Information");
    println!("==================\n");

    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();

    println!("Data Summary:");
    println!("  Books:            {}", export.metadata.book_count);
    println!("  Total copies:     {}", export.metadata.total_copies);
    println!("  Available copies: {}", export.metadata.available_copies);
    println!("  Copies on loan:   {}", export.metadata.copies_on_loan);

    println!("\nAvailable Export Formats:");
    println!("  csv  - CSV format (book list with borrowed counts)");
    println!("  json - JSON format (full catalog, machine-readable)");
    println!("  yaml - YAML format (full catalog, human-readable)");

    println!("\nExamples:");
    println!("  catalog export all catalog.json --format json --pretty");
    println!("  catalog export all books.csv --format csv");

    Ok(())
}
