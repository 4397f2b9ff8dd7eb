//! Storage layer for the library catalog
//!
//! The catalog lives in a single `;`-delimited data file that is loaded
//! wholly into memory and rewritten wholly after every mutation.

pub mod books;
pub mod file_io;

pub use books::BookRepository;
pub use file_io::{read_books, write_books_atomic};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::paths::CatalogPaths;
use crate::error::CatalogResult;
use crate::models::Book;

/// Owns the book repository and the audit log for one catalog directory
pub struct Storage {
    paths: CatalogPaths,
    pub books: BookRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CatalogPaths) -> CatalogResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            books: BookRepository::new(paths.books_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> CatalogResult<()> {
        self.books.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> CatalogResult<()> {
        self.books.save()
    }

    fn record(&self, entry: AuditEntry) -> CatalogResult<()> {
        if self.audit_enabled {
            self.audit.log(&entry)?;
        }
        Ok(())
    }

    /// Audit a newly added book
    pub fn log_create(&self, book: &Book) -> CatalogResult<()> {
        self.record(AuditEntry::create(book))
    }

    /// Audit an overwrite of a book's fields
    pub fn log_update(&self, before: &Book, after: &Book) -> CatalogResult<()> {
        self.record(AuditEntry::update(before, after))
    }

    /// Audit a deleted book
    pub fn log_delete(&self, book: &Book) -> CatalogResult<()> {
        self.record(AuditEntry::delete(book))
    }

    /// Audit a borrow or return
    pub fn log_stock(&self, operation: Operation, before: &Book, after: &Book) -> CatalogResult<()> {
        self.record(AuditEntry::stock(operation, before, after))
    }
}
