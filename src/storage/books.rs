//! Book repository backed by the catalog data file
//!
//! Holds the whole catalog in memory in insertion order. Mutations only touch
//! memory; callers flush with `save()` once a mutation has succeeded.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, BookId};

use super::file_io::{read_books, write_books_atomic};

/// Repository for book persistence
pub struct BookRepository {
    path: PathBuf,
    data: RwLock<Vec<Book>>,
}

impl BookRepository {
    /// Create a new book repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.data.read().map_err(|e| {
            CatalogError::Repository(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.data.write().map_err(|e| {
            CatalogError::Repository(format!("Failed to acquire write lock: {}", e))
        })
    }

    /// Load books from disk, replacing whatever is in memory
    pub fn load(&self) -> CatalogResult<()> {
        let books = read_books(&self.path)?;
        *self.write()? = books;
        Ok(())
    }

    /// Rewrite the whole data file from memory
    pub fn save(&self) -> CatalogResult<()> {
        let data = self.read()?;
        write_books_atomic(&self.path, &data)
    }

    /// Add a new book
    pub fn add(&self, book: Book) -> CatalogResult<Book> {
        let mut data = self.write()?;

        if data.iter().any(|b| b.id == book.id) {
            return Err(CatalogError::book_exists());
        }

        data.push(book.clone());
        Ok(book)
    }

    /// Get a book by ID
    pub fn get(&self, id: BookId) -> CatalogResult<Book> {
        let data = self.read()?;

        data.iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(CatalogError::book_not_found)
    }

    /// Get all books in store order
    pub fn get_all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    /// Find books whose title and author contain the given filters
    /// (case-insensitive; an empty or missing filter matches everything)
    pub fn find(&self, title: Option<&str>, author: Option<&str>) -> CatalogResult<Vec<Book>> {
        let data = self.read()?;

        Ok(data
            .iter()
            .filter(|b| b.matches(title, author))
            .cloned()
            .collect())
    }

    /// Overwrite title, author and quantity of the stored record with the
    /// same id. The stored initial quantity is left untouched.
    pub fn update(&self, book: &Book) -> CatalogResult<Book> {
        self.modify(book.id, |existing| {
            existing.title = book.title.clone();
            existing.author = book.author.clone();
            existing.quantity = book.quantity;
            Ok(())
        })
    }

    /// Apply a fallible change to the live record. If the closure fails the
    /// record is left as it was.
    pub fn modify<F>(&self, id: BookId, f: F) -> CatalogResult<Book>
    where
        F: FnOnce(&mut Book) -> CatalogResult<()>,
    {
        let mut data = self.write()?;

        let existing = data
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(CatalogError::book_not_found)?;

        let mut changed = existing.clone();
        f(&mut changed)?;
        *existing = changed.clone();

        Ok(changed)
    }

    /// Delete a book, returning the removed record
    pub fn delete(&self, id: BookId) -> CatalogResult<Book> {
        let mut data = self.write()?;

        let index = data
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(CatalogError::book_not_found)?;

        Ok(data.remove(index))
    }

    /// Check if a book exists
    pub fn exists(&self, id: BookId) -> CatalogResult<bool> {
        Ok(self.read()?.iter().any(|b| b.id == id))
    }

    /// Count books
    pub fn count(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BookRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.csv");
        let repo = BookRepository::new(path);
        (temp_dir, repo)
    }

    fn book(title: &str, author: &str, quantity: i32) -> Book {
        Book::new(BookId::new(), title, author, quantity)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let b = book("Dune", "Herbert", 2);
        let id = b.id;

        repo.add(b.clone()).unwrap();

        assert_eq!(repo.get(id).unwrap(), b);
        assert!(repo.exists(id).unwrap());
    }

    #[test]
    fn test_add_duplicate_leaves_state_alone() {
        let (_temp_dir, repo) = create_test_repo();
        let b = book("Dune", "Herbert", 2);
        repo.add(b.clone()).unwrap();

        let mut dup = b.clone();
        dup.title = "Other".into();
        let err = repo.add(dup).unwrap_err();

        assert_eq!(err.to_string(), "Book already exists.");
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(b.id).unwrap().title, "Dune");
    }

    #[test]
    fn test_get_missing() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.get(BookId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        let titles = ["C", "A", "B"];
        for t in titles {
            repo.add(book(t, "X", 1)).unwrap();
        }

        let all: Vec<_> = repo.get_all().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(all, titles);
    }

    #[test]
    fn test_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(book("The Hobbit", "J.R.R. Tolkien", 1)).unwrap();
        repo.add(book("The Silmarillion", "J.R.R. Tolkien", 1)).unwrap();
        repo.add(book("Hobbit Cookbook", "Someone Else", 1)).unwrap();

        assert_eq!(repo.find(None, None).unwrap().len(), 3);
        assert_eq!(repo.find(Some(""), Some("")).unwrap().len(), 3);
        assert_eq!(repo.find(Some("hobbit"), None).unwrap().len(), 2);
        assert_eq!(repo.find(None, Some("tolkien")).unwrap().len(), 2);

        let both = repo.find(Some("HOBBIT"), Some("tolkien")).unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "The Hobbit");

        assert!(repo.find(Some("dune"), None).unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_initial_quantity() {
        let (_temp_dir, repo) = create_test_repo();
        let b = book("Old", "Author", 4);
        let id = b.id;
        repo.add(b).unwrap();

        let replacement = Book::new(id, "New", "Someone", 9);
        let updated = repo.update(&replacement).unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.author, "Someone");
        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.initial_quantity, 4);
        assert_eq!(repo.get(id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.update(&book("T", "A", 1)).unwrap_err();
        assert_eq!(err.to_string(), "Book not found.");
    }

    #[test]
    fn test_failed_modify_changes_nothing() {
        let (_temp_dir, repo) = create_test_repo();
        let b = book("T", "A", 2);
        let id = b.id;
        repo.add(b).unwrap();

        let err = repo
            .modify(id, |book| {
                book.title = "Changed".into();
                book.decrease_stock(5)
            })
            .unwrap_err();

        assert!(err.is_domain());
        let stored = repo.get(id).unwrap();
        assert_eq!(stored.title, "T");
        assert_eq!(stored.quantity, 2);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let b = book("T", "A", 1);
        let id = b.id;
        repo.add(b).unwrap();

        let removed = repo.delete(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(!repo.exists(id).unwrap());
        assert!(repo.delete(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let mut b = book("Saved", "Author", 3);
        b.decrease_stock(1).unwrap();
        let id = b.id;

        repo.load().unwrap();
        repo.add(b).unwrap();
        repo.save().unwrap();

        let repo2 = BookRepository::new(temp_dir.path().join("books.csv"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap();
        assert_eq!(retrieved.title, "Saved");
        assert_eq!(retrieved.quantity, 2);
        assert_eq!(retrieved.initial_quantity, 3);
    }
}
