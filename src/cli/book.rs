//! Book CLI commands
//!
//! Implements CLI commands for catalog management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_book_list, format_book_summary, format_most_borrowed_table,
};
use crate::error::{CatalogError, CatalogResult};
use crate::models::BookId;
use crate::services::BookService;
use crate::storage::Storage;

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
        /// Number of copies owned
        #[arg(allow_hyphen_values = true)]
        quantity: i32,
    },
    /// List all books
    List,
    /// Show book details
    Show {
        /// Book ID
        id: String,
    },
    /// Overwrite a book's title, author and available quantity
    Update {
        /// Book ID
        id: String,
        /// New title
        title: String,
        /// New author
        author: String,
        /// New available quantity
        #[arg(allow_hyphen_values = true)]
        quantity: i32,
    },
    /// Delete a book
    Delete {
        /// Book ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Search books by title and/or author
    Search {
        /// Case-insensitive title substring
        #[arg(short, long)]
        title: Option<String>,
        /// Case-insensitive author substring
        #[arg(short, long)]
        author: Option<String>,
    },
    /// Borrow copies of a book
    Borrow {
        /// Book ID
        id: String,
        /// Number of copies
        #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
        amount: i32,
    },
    /// Return borrowed copies of a book
    Return {
        /// Book ID
        id: String,
        /// Number of copies
        #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
        amount: i32,
    },
    /// Show the most borrowed books
    Top {
        /// How many books to show (defaults to the configured value)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i32>,
    },
}

/// Handle a book command
pub fn handle_book_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BookCommands,
) -> CatalogResult<()> {
    let service = BookService::new(storage);

    match cmd {
        BookCommands::Add {
            title,
            author,
            quantity,
        } => {
            let book = service.add_book(BookId::new(), &title, &author, quantity)?;
            println!("Book added.");
            println!("ID: {}", book.id);
        }

        BookCommands::List => {
            let books = service.get_all_books()?;
            println!("{}", format_book_list(&books));
        }

        BookCommands::Show { id } => {
            let book = service.get_book(parse_id(&id)?)?;
            print!("{}", format_book_summary(&book));
        }

        BookCommands::Update {
            id,
            title,
            author,
            quantity,
        } => {
            service.update_book(parse_id(&id)?, &title, &author, quantity)?;
            println!("Book updated.");
        }

        BookCommands::Delete { id, force } => {
            let id = parse_id(&id)?;

            if !force {
                let book = service.get_book(id)?;
                println!("About to delete '{}'.", book);
                println!("To proceed, run again with --force flag:");
                println!("  catalog book delete {} --force", id);
                return Ok(());
            }

            service.delete_book(id)?;
            println!("Book deleted.");
        }

        BookCommands::Search { title, author } => {
            let books = service.search_books(title.as_deref(), author.as_deref())?;
            println!("{}", format_book_list(&books));
        }

        BookCommands::Borrow { id, amount } => {
            let book = service.borrow_book(parse_id(&id)?, amount)?;
            println!("Book borrowed successfully.");
            println!("Available: {} of {}", book.quantity, book.initial_quantity);
        }

        BookCommands::Return { id, amount } => {
            let book = service.return_book(parse_id(&id)?, amount)?;
            println!("Book returned successfully.");
            println!("Available: {} of {}", book.quantity, book.initial_quantity);
        }

        BookCommands::Top { count } => {
            let count = count.unwrap_or(settings.default_top);
            let books = service.most_borrowed_books(count)?;
            println!("Top {} most borrowed books:", count);
            println!("{}", format_most_borrowed_table(&books));
        }
    }

    Ok(())
}

/// Parse a book ID typed by the user
pub fn parse_id(input: &str) -> CatalogResult<BookId> {
    BookId::parse(input)
        .map_err(|_| CatalogError::Input(format!("'{}' is not a valid book ID", input.trim())))
}

/// Parse a whole number typed by the user
pub fn parse_number(input: &str) -> CatalogResult<i32> {
    input
        .trim()
        .parse()
        .map_err(|_| CatalogError::Input(format!("'{}' is not a number", input.trim())))
}
