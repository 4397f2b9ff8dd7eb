//! Path management for the library catalog
//!
//! ## Path Resolution Order
//!
//! 1. `LIBRARY_CATALOG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `library-catalog`
//!    (`~/.config/library-catalog` on Linux, `%APPDATA%\library-catalog` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CatalogError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "LIBRARY_CATALOG_DIR";

/// Manages all paths used by the catalog
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Base directory for all catalog data
    base_dir: PathBuf,
}

impl CatalogPaths {
    /// Create a new CatalogPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, CatalogError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CatalogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the catalog data file
    pub fn books_file(&self) -> PathBuf {
        self.data_dir().join("books.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CatalogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CatalogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CatalogError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| CatalogError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if the catalog has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    let base = BaseDirs::new().ok_or_else(|| {
        CatalogError::Config("Could not determine the user configuration directory".into())
    })?;
    Ok(base.config_dir().join("library-catalog"))
}
