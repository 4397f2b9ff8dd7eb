//! Catalog data file codec with atomic writes
//!
//! One record per line, fields separated by `;` in the order
//! `id;title;author;quantity;initial_quantity`. Fields are never quoted or
//! escaped, so a `;` inside a title or author breaks that record on reload.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, BookId};

const FIELD_COUNT: usize = 5;

fn load_error(detail: impl std::fmt::Display) -> CatalogError {
    CatalogError::Repository(format!("Error while loading CSV file: {}", detail))
}

fn save_error(detail: impl std::fmt::Display) -> CatalogError {
    CatalogError::Repository(format!("Error while saving CSV file: {}", detail))
}

/// Parse catalog records from a reader
pub fn parse_books<R: Read>(reader: R) -> CatalogResult<Vec<Book>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut books = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(load_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let book = parse_record(&record).map_err(|e| load_error(format!("line {}: {}", line, e)))?;

        if !seen.insert(book.id) {
            return Err(load_error(format!("line {}: duplicate id {}", line, book.id)));
        }
        books.push(book);
    }

    Ok(books)
}

fn parse_record(record: &StringRecord) -> Result<Book, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let id = BookId::parse(&record[0]).map_err(|e| format!("invalid id '{}': {}", &record[0], e))?;
    let quantity = parse_int(&record[3], "quantity")?;
    let initial_quantity = parse_int(&record[4], "initial quantity")?;

    Ok(Book::from_parts(
        id,
        &record[1],
        &record[2],
        quantity,
        initial_quantity,
    ))
}

fn parse_int(field: &str, name: &str) -> Result<i32, String> {
    field
        .trim()
        .parse()
        .map_err(|e| format!("invalid {} '{}': {}", name, field, e))
}

/// Serialize catalog records to a writer
pub fn write_books<W: Write>(writer: W, books: &[Book]) -> CatalogResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    for book in books {
        writer
            .write_record([
                book.id.to_string(),
                book.title.clone(),
                book.author.clone(),
                book.quantity.to_string(),
                book.initial_quantity.to_string(),
            ])
            .map_err(save_error)?;
    }

    writer.flush().map_err(save_error)?;
    Ok(())
}

/// Read the catalog file, returning an empty catalog if it doesn't exist
pub fn read_books<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<Book>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| load_error(format!("failed to open {}: {}", path.display(), e)))?;

    parse_books(BufReader::new(file))
}

/// Rewrite the catalog file atomically (write to temp, then rename)
pub fn write_books_atomic<P: AsRef<Path>>(path: P, books: &[Book]) -> CatalogResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            save_error(format!(
                "failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| save_error(format!("failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_books(&mut writer, books)?;

    writer
        .flush()
        .map_err(|e| save_error(format!("failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| save_error(format!("failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        save_error(format!("failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Check if a catalog file exists and parses cleanly
pub fn catalog_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.exists() && read_books(path).is_ok()
}
