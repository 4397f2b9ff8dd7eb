//! CSV Export functionality
//!
//! Spreadsheet-friendly export: comma-separated, quoted where needed, with a
//! header row. Unlike the data file, titles and authors may contain any
//! character here.

use serde::Serialize;
use std::io::Write;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;
use crate::storage::Storage;

#[derive(Serialize)]
struct BookCsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Author")]
    author: &'a str,
    #[serde(rename = "Available")]
    available: i32,
    #[serde(rename = "Total")]
    total: i32,
    #[serde(rename = "Borrowed")]
    borrowed: i64,
}

impl<'a> From<&'a Book> for BookCsvRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: &book.title,
            author: &book.author,
            available: book.quantity,
            total: book.initial_quantity,
            borrowed: book.borrowed_count(),
        }
    }
}

/// Export all books to CSV
pub fn export_books_csv<W: Write>(storage: &Storage, writer: &mut W) -> CatalogResult<()> {
    let books = storage.books.get_all()?;
    write_books_csv(&books, writer)
}

fn write_books_csv<W: Write>(books: &[Book], writer: &mut W) -> CatalogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for book in books {
        csv_writer
            .serialize(BookCsvRow::from(book))
            .map_err(|e| CatalogError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CatalogError::Export(e.to_string()))?;
    Ok(())
}
