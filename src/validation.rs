//! Structural validation of books before they are persisted
//!
//! Rules are checked in a fixed order (title, author, quantity) and the first
//! one violated is reported.

use std::fmt;

use crate::error::CatalogError;
use crate::models::Book;

/// Validation errors for books
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    InvalidTitle,
    InvalidAuthor,
    /// Displayed as "Invalid cantity.", spelling kept for scripts that match it
    InvalidQuantity,
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "Invalid title."),
            Self::InvalidAuthor => write!(f, "Invalid author."),
            Self::InvalidQuantity => write!(f, "Invalid cantity."),
        }
    }
}

impl std::error::Error for BookValidationError {}

impl From<BookValidationError> for CatalogError {
    fn from(err: BookValidationError) -> Self {
        CatalogError::Domain(err.to_string())
    }
}

/// Check a candidate book. Does not consult the store.
pub fn validate_book(book: &Book) -> Result<(), BookValidationError> {
    if book.title.trim().is_empty() {
        return Err(BookValidationError::InvalidTitle);
    }

    if book.author.trim().is_empty() {
        return Err(BookValidationError::InvalidAuthor);
    }

    if book.quantity < 0 {
        return Err(BookValidationError::InvalidQuantity);
    }

    Ok(())
}
