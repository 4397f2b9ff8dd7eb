//! Backup management for the library catalog
//!
//! Rolling timestamped copies of the data file, plus restore.

pub mod manager;
pub mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult};
