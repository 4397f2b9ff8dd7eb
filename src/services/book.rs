//! Book service
//!
//! Business operations on the catalog: validation before writes, borrow and
//! return rules, and the "most borrowed" ranking. Every successful mutation
//! rewrites the data file and is then recorded in the audit log.

use crate::audit::Operation;
use crate::error::CatalogResult;
use crate::models::{Book, BookId};
use crate::storage::Storage;
use crate::validation::validate_book;

/// Service for catalog management
pub struct BookService<'a> {
    storage: &'a Storage,
}

impl<'a> BookService<'a> {
    /// Create a new book service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new book. Its quantity is also its initial quantity.
    pub fn add_book(
        &self,
        id: BookId,
        title: &str,
        author: &str,
        quantity: i32,
    ) -> CatalogResult<Book> {
        let book = Book::new(id, title, author, quantity);
        validate_book(&book)?;

        let book = self.storage.books.add(book)?;
        self.storage.books.save()?;

        self.storage.log_create(&book)?;

        Ok(book)
    }

    /// Get a book by ID
    pub fn get_book(&self, id: BookId) -> CatalogResult<Book> {
        self.storage.books.get(id)
    }

    /// List all books in store order
    pub fn get_all_books(&self) -> CatalogResult<Vec<Book>> {
        self.storage.books.get_all()
    }

    /// Search by case-insensitive title and/or author substring
    pub fn search_books(&self, title: Option<&str>, author: Option<&str>) -> CatalogResult<Vec<Book>> {
        self.storage.books.find(title, author)
    }

    /// Overwrite title, author and quantity of an existing book.
    ///
    /// The stored initial quantity is never adjusted, so raising the quantity
    /// here can leave it above the initial quantity. Returns later check
    /// against the unchanged initial quantity.
    pub fn update_book(
        &self,
        id: BookId,
        title: &str,
        author: &str,
        quantity: i32,
    ) -> CatalogResult<Book> {
        let candidate = Book::new(id, title, author, quantity);
        validate_book(&candidate)?;

        let before = self.storage.books.get(id)?;
        let updated = self.storage.books.update(&candidate)?;
        self.storage.books.save()?;

        self.storage.log_update(&before, &updated)?;

        Ok(updated)
    }

    /// Delete a book
    pub fn delete_book(&self, id: BookId) -> CatalogResult<Book> {
        let removed = self.storage.books.delete(id)?;
        self.storage.books.save()?;

        self.storage.log_delete(&removed)?;

        Ok(removed)
    }

    /// Borrow `amount` copies of a book
    pub fn borrow_book(&self, id: BookId, amount: i32) -> CatalogResult<Book> {
        self.move_stock(id, Operation::Borrow, |book| book.decrease_stock(amount))
    }

    /// Return `amount` copies of a book
    pub fn return_book(&self, id: BookId, amount: i32) -> CatalogResult<Book> {
        self.move_stock(id, Operation::Return, |book| book.increase_stock(amount))
    }

    fn move_stock<F>(&self, id: BookId, operation: Operation, f: F) -> CatalogResult<Book>
    where
        F: FnOnce(&mut Book) -> CatalogResult<()>,
    {
        let before = self.storage.books.get(id)?;
        let after = self.storage.books.modify(id, f)?;
        self.storage.books.save()?;

        self.storage.log_stock(operation, &before, &after)?;

        Ok(after)
    }

    /// The `top` books with the most copies out on loan, most borrowed first.
    ///
    /// Books with equal counts keep their store order. `top <= 0` yields an
    /// empty list.
    pub fn most_borrowed_books(&self, top: i32) -> CatalogResult<Vec<Book>> {
        let books = self.storage.books.get_all()?;
        Ok(rank_most_borrowed(books, top))
    }
}

/// Stable sort by borrowed count descending, truncated to `top`
pub fn rank_most_borrowed(mut books: Vec<Book>, top: i32) -> Vec<Book> {
    let Ok(top) = usize::try_from(top) else {
        return Vec::new();
    };

    books.sort_by(|a, b| b.borrowed_count().cmp(&a.borrowed_count()));
    books.truncate(top);
    books
}
