//! Backup manager for the library catalog
//!
//! Keeps timestamped copies of the catalog data file and prunes the oldest
//! ones beyond the configured retention count.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::CatalogPaths;
use crate::config::settings::BackupRetention;
use crate::error::{CatalogError, CatalogResult};

const PREFIX: &str = "books-";
const EXTENSION: &str = "csv";

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    books_file: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &CatalogPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            books_file: paths.books_file(),
            retention,
        }
    }

    /// Copy the current data file into the backup directory.
    ///
    /// A catalog that was never saved is backed up as an empty file.
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> CatalogResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            CatalogError::Backup(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "{}{}-{:03}.{}",
            PREFIX,
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis(),
            EXTENSION
        );
        let backup_path = self.backup_dir.join(&filename);

        if self.books_file.exists() {
            fs::copy(&self.books_file, &backup_path)
                .map_err(|e| CatalogError::Backup(format!("Failed to copy data file: {}", e)))?;
        } else {
            fs::write(&backup_path, "")
                .map_err(|e| CatalogError::Backup(format!("Failed to write backup file: {}", e)))?;
        }

        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> CatalogResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.backup_dir).map_err(|e| {
            CatalogError::Backup(format!("Failed to read backup directory: {}", e))
        })?;

        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                CatalogError::Backup(format!("Failed to read directory entry: {}", e))
            })?;

            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete backups beyond the retention count, oldest first
    pub fn enforce_retention(&self) -> CatalogResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.keep_count as usize)
        {
            fs::remove_file(&backup.path).map_err(|e| {
                CatalogError::Backup(format!("Failed to delete old backup: {}", e))
            })?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(&self) -> CatalogResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> CatalogResult<Option<BackupInfo>> {
        Ok(parse_backup_info(&self.backup_dir.join(filename)))
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> CatalogResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename
        .strip_prefix(PREFIX)?
        .strip_suffix(EXTENSION)?
        .strip_suffix('.')?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` (milliseconds optional)
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = stamp.split('-').collect();
    let (date_part, time_part, millis): (&str, &str, u32) = match parts.as_slice() {
        [date, time] => (*date, *time, 0),
        [date, time, millis] => (*date, *time, millis.parse().ok()?),
        _ => return None,
    };

    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    let time = NaiveTime::parse_from_str(time_part, "%H%M%S")
        .ok()?
        .with_nanosecond(millis.checked_mul(1_000_000)?)?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(date, time),
        Utc,
    ))
}
