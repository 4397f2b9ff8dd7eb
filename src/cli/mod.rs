//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod backup;
pub mod book;
pub mod export;
pub mod menu;

pub use audit::handle_audit_command;
pub use backup::{handle_backup_command, BackupCommands};
pub use book::{handle_book_command, BookCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use menu::Menu;
