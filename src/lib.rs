//! Library catalog - single-user book catalog manager
//!
//! Tracks books with their total and available copies, supports borrowing
//! and returning, and ranks the most borrowed titles. The catalog is stored
//! in one `;`-delimited text file that is loaded into memory at startup and
//! rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The book entity and its identifier
//! - `validation`: Checks run on a book before it is persisted
//! - `storage`: Flat-file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `backup`: Backup and restore of the data file
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::config::paths::CatalogPaths;
//! use catalog::models::BookId;
//! use catalog::services::BookService;
//! use catalog::storage::Storage;
//!
//! let storage = Storage::new(CatalogPaths::new()?)?;
//! storage.load_all()?;
//!
//! let service = BookService::new(&storage);
//! let book = service.add_book(BookId::new(), "Dune", "Frank Herbert", 3)?;
//! service.borrow_book(book.id, 1)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{CatalogError, CatalogResult};
