//! JSON Export functionality
//!
//! Exports the whole catalog to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full catalog export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All books in store order
    pub books: Vec<Book>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Totals over the exported catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of books
    pub book_count: usize,

    /// Sum of initial quantities
    pub total_copies: i64,

    /// Sum of copies currently available
    pub available_copies: i64,

    /// Sum of copies currently on loan
    pub copies_on_loan: i64,
}

impl CatalogExport {
    /// Snapshot the catalog held by storage
    pub fn from_storage(storage: &Storage) -> CatalogResult<Self> {
        Ok(Self::from_books(storage.books.get_all()?))
    }

    /// Build an export from a list of books
    pub fn from_books(books: Vec<Book>) -> Self {
        let metadata = ExportMetadata {
            book_count: books.len(),
            total_copies: books.iter().map(|b| i64::from(b.initial_quantity)).sum(),
            available_copies: books.iter().map(|b| i64::from(b.quantity)).sum(),
            copies_on_loan: books.iter().map(Book::borrowed_count).sum(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            books,
            metadata,
        }
    }
}

/// Export the catalog to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> CatalogResult<()> {
    let export = CatalogExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| CatalogError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CatalogError::Export(e.to_string()))?;
    Ok(())
}
