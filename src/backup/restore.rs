//! Backup restoration for the library catalog

use std::path::Path;

use crate::config::paths::CatalogPaths;
use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;
use crate::storage::file_io::{read_books, write_books_atomic};

/// Handles restoring from backups
pub struct RestoreManager {
    paths: CatalogPaths,
}

/// Outcome of a restore
#[derive(Debug, Clone, Default)]
pub struct RestoreResult {
    /// Number of books now in the catalog
    pub books_restored: usize,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: CatalogPaths) -> Self {
        Self { paths }
    }

    fn load_backup(&self, backup_path: &Path) -> CatalogResult<Vec<Book>> {
        if !backup_path.exists() {
            return Err(CatalogError::Backup(format!(
                "Backup not found: {}",
                backup_path.display()
            )));
        }

        read_books(backup_path)
            .map_err(|e| CatalogError::Backup(format!("Backup is not a valid catalog: {}", e)))
    }

    /// Check that a backup parses as a catalog, returning its book count
    pub fn validate_backup(&self, backup_path: &Path) -> CatalogResult<usize> {
        Ok(self.load_backup(backup_path)?.len())
    }

    /// Replace the catalog data file with the contents of a backup.
    ///
    /// The backup is parsed first, so a corrupt backup never overwrites
    /// the current data.
    pub fn restore_from_file(&self, backup_path: &Path) -> CatalogResult<RestoreResult> {
        let books = self.load_backup(backup_path)?;
        self.paths.ensure_directories()?;
        write_books_atomic(self.paths.books_file(), &books)?;

        Ok(RestoreResult {
            books_restored: books.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use crate::config::settings::BackupRetention;
    use crate::models::BookId;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CatalogPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_backup_and_restore() {
        let (_temp, paths) = setup();
        let original = vec![Book::new(BookId::new(), "Dune", "Frank Herbert", 2)];
        write_books_atomic(paths.books_file(), &original).unwrap();

        let manager = BackupManager::new(&paths, BackupRetention::default());
        let backup_path = manager.create_backup().unwrap();

        write_books_atomic(paths.books_file(), &[]).unwrap();

        let restore = RestoreManager::new(paths.clone());
        let result = restore.restore_from_file(&backup_path).unwrap();

        assert_eq!(result.books_restored, 1);
        assert_eq!(read_books(paths.books_file()).unwrap(), original);
    }

    #[test]
    fn test_corrupt_backup_is_rejected() {
        let (_temp, paths) = setup();
        let original = vec![Book::new(BookId::new(), "Kept", "Author", 1)];
        write_books_atomic(paths.books_file(), &original).unwrap();

        let bad = paths.backup_dir().join("books-20250101-000000-000.csv");
        std::fs::write(&bad, "not;a;catalog\n").unwrap();

        let restore = RestoreManager::new(paths.clone());
        let err = restore.restore_from_file(&bad).unwrap_err();

        assert!(matches!(err, CatalogError::Backup(_)));
        assert_eq!(read_books(paths.books_file()).unwrap(), original);
    }

    #[test]
    fn test_missing_backup() {
        let (_temp, paths) = setup();
        let restore = RestoreManager::new(paths.clone());
        let err = restore
            .validate_backup(&paths.backup_dir().join("nope.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Backup not found"));
    }
}
