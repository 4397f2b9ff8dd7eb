//! Custom error types for the library catalog
//!
//! Errors carry a kind tag so callers can tell business-rule violations
//! (`Domain`) apart from store failures (`Repository`). Both display their
//! message verbatim, since the wording is part of the tool's observable output.

use thiserror::Error;

/// The main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An operation would violate a business invariant
    #[error("{0}")]
    Domain(String),

    /// The store cannot satisfy a structural request
    #[error("{0}")]
    Repository(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed user input (ids, numbers)
    #[error("Invalid input: {0}")]
    Input(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CatalogError {
    /// The error raised when an id is not in the catalog
    pub fn book_not_found() -> Self {
        Self::Repository("Book not found.".into())
    }

    /// The error raised when adding an id that is already in the catalog
    pub fn book_exists() -> Self {
        Self::Repository("Book already exists.".into())
    }

    /// Check if this is a business-rule violation
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Check if this is a store failure
    pub fn is_repository(&self) -> bool {
        matches!(self, Self::Repository(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(msg) if msg == "Book not found.")
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Repository(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
