use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

use catalog::cli::{
    handle_audit_command, handle_backup_command, handle_book_command, handle_export_command,
    BackupCommands, BookCommands, ExportCommands, Menu,
};
use catalog::config::{paths::CatalogPaths, settings::Settings};
use catalog::storage::{file_io::catalog_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Terminal-based library catalog manager",
    long_about = "Keeps track of the books a small library owns, how many copies \
                  are on the shelf, and which titles are borrowed the most. Run \
                  without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Book management commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export the catalog
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize a new catalog
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CatalogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; the catalog itself is loaded only by commands that read it
    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        None | Some(Commands::Menu) => {
            storage.load_all()?;
            let stdin = io::stdin();
            Menu::new(&storage, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Book(cmd)) => {
            storage.load_all()?;
            handle_book_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            storage.load_all()?;
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            storage.load_all()?;
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing catalog at: {}", paths.base_dir().display());
            if !paths.books_file().exists() {
                storage.save_all()?;
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'catalog book add <TITLE> <AUTHOR> <QUANTITY>' to add a book,");
            println!("or 'catalog' to open the interactive menu.");
        }
        Some(Commands::Config) => {
            println!("Library Catalog Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.books_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", yes_no(paths.is_initialized()));
            println!("Data file valid:  {}", yes_no(catalog_file_valid(paths.books_file())));
            println!();
            println!("Settings:");
            println!("  Default top count: {}", settings.default_top);
            println!("  Audit enabled:     {}", settings.audit_enabled);
            println!("  Backups kept:      {}", settings.backup_retention.keep_count);
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
