//! Book display formatting
//!
//! Formats books for terminal output in table, detail and ranking views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Book;

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Available")]
    available: i32,
    #[tabled(rename = "Total")]
    total: i32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            available: book.quantity,
            total: book.initial_quantity,
        }
    }
}

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Borrowed")]
    borrowed: i64,
}

/// Format a list of books as a table
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }

    let rows: Vec<BookRow> = books.iter().map(BookRow::from).collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n\nTotal: {} book(s)", books.len()));
    output
}

/// Format a single book as an `ID/Title/Author/Quantity` block
pub fn format_book_details(book: &Book) -> String {
    format!(
        "ID: {}\nTitle: {}\nAuthor: {}\nQuantity: {}\n",
        book.id, book.title, book.author, book.quantity
    )
}

/// Format a single book with its stock breakdown
pub fn format_book_summary(book: &Book) -> String {
    let mut output = format_book_details(book);
    output.push_str(&format!("Total copies: {}\n", book.initial_quantity));
    output.push_str(&format!("On loan: {}\n", book.borrowed_count()));
    output
}

/// Format the "most borrowed" report as plain lines
pub fn format_most_borrowed(books: &[Book], count: i32) -> String {
    let mut output = format!("Top {} most borrowed books:\n", count);
    for book in books {
        output.push_str(&format!(
            "Title: {} | Author: {} | Times Borrowed: {}\n",
            book.title,
            book.author,
            book.borrowed_count()
        ));
    }
    output
}

/// Format the "most borrowed" report as a ranked table
pub fn format_most_borrowed_table(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }

    let rows: Vec<RankRow> = books
        .iter()
        .enumerate()
        .map(|(i, book)| RankRow {
            rank: i + 1,
            title: book.title.clone(),
            author: book.author.clone(),
            borrowed: book.borrowed_count(),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}
