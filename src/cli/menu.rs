//! Interactive menu
//!
//! The numbered text menu that drives the catalog when no subcommand is
//! given. It reads from any `BufRead` and writes to any `Write`, so the
//! binary runs it over stdin/stdout and tests run it over in-memory buffers.

use std::io::{BufRead, Write};

use crate::cli::book::{parse_id, parse_number};
use crate::display::{format_book_details, format_most_borrowed};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, BookId};
use crate::services::BookService;
use crate::storage::Storage;

const MENU: &str = "\n--- Library Management ---\n\
1. Add book\n\
2. View all books\n\
3. Update book\n\
4. Delete book\n\
5. Search books\n\
6. Borrow book\n\
7. Return book\n\
8. Show most borrowed books\n\
0. Exit\n";

/// Menu loop over a book service
pub struct Menu<'a, R, W> {
    service: BookService<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub fn new(storage: &'a Storage, input: R, output: W) -> Self {
        Self {
            service: BookService::new(storage),
            input,
            output,
        }
    }

    /// Run until the user picks `0` or input ends.
    ///
    /// Errors raised by a menu action are printed and the loop continues.
    /// Only failing to read the choice or write to the terminal ends it early.
    pub fn run(&mut self) -> CatalogResult<()> {
        loop {
            write!(self.output, "{}Choose an option: ", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let result = match choice.trim() {
                "1" => self.add_book(),
                "2" => self.view_books(),
                "3" => self.update_book(),
                "4" => self.delete_book(),
                "5" => self.search_books(),
                "6" => self.borrow_book(),
                "7" => self.return_book(),
                "8" => self.show_most_borrowed(),
                "0" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    Ok(())
                }
            };

            if let Err(e) = result {
                writeln!(self.output, "Error: {}", e)?;
            }
        }
    }

    fn add_book(&mut self) -> CatalogResult<()> {
        let title = self.prompt("Title: ")?;
        let author = self.prompt("Author: ")?;
        let quantity = parse_number(&self.prompt("Quantity: ")?)?;

        self.service.add_book(BookId::new(), &title, &author, quantity)?;
        writeln!(self.output, "Book added.")?;
        Ok(())
    }

    fn view_books(&mut self) -> CatalogResult<()> {
        let books = self.service.get_all_books()?;
        self.print_books(&books)
    }

    fn update_book(&mut self) -> CatalogResult<()> {
        let id = parse_id(&self.prompt("Enter book ID to update: ")?)?;
        let title = self.prompt("New Title: ")?;
        let author = self.prompt("New Author: ")?;
        let quantity = parse_number(&self.prompt("New Quantity: ")?)?;

        self.service.update_book(id, &title, &author, quantity)?;
        writeln!(self.output, "Book updated.")?;
        Ok(())
    }

    fn delete_book(&mut self) -> CatalogResult<()> {
        let id = parse_id(&self.prompt("Enter book ID to delete: ")?)?;

        self.service.delete_book(id)?;
        writeln!(self.output, "Book deleted.")?;
        Ok(())
    }

    fn search_books(&mut self) -> CatalogResult<()> {
        let title = self.prompt("Filter by title (leave empty for none): ")?;
        let author = self.prompt("Filter by author (leave empty for none): ")?;

        let books = self.service.search_books(Some(&title), Some(&author))?;
        self.print_books(&books)
    }

    fn borrow_book(&mut self) -> CatalogResult<()> {
        let id = parse_id(&self.prompt("Enter book ID to borrow: ")?)?;
        let amount = parse_number(&self.prompt("Enter quantity to borrow: ")?)?;

        self.service.borrow_book(id, amount)?;
        writeln!(self.output, "Book borrowed successfully.")?;
        Ok(())
    }

    fn return_book(&mut self) -> CatalogResult<()> {
        let id = parse_id(&self.prompt("Enter book ID to return: ")?)?;
        let amount = parse_number(&self.prompt("Enter quantity to return: ")?)?;

        self.service.return_book(id, amount)?;
        writeln!(self.output, "Book returned successfully.")?;
        Ok(())
    }

    fn show_most_borrowed(&mut self) -> CatalogResult<()> {
        let count = parse_number(&self.prompt("How many top books to display? ")?)?;
        let books = self.service.most_borrowed_books(count)?;

        writeln!(self.output)?;
        write!(self.output, "{}", format_most_borrowed(&books, count))?;
        Ok(())
    }

    fn print_books(&mut self, books: &[Book]) -> CatalogResult<()> {
        for book in books {
            writeln!(self.output, "{}", format_book_details(book))?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> CatalogResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.read_line()?
            .ok_or_else(|| CatalogError::Input("unexpected end of input".into()))
    }

    /// Next line without its line ending, or `None` at end of input
    fn read_line(&mut self) -> CatalogResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
