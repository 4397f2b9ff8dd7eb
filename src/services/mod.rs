//! Service layer for the library catalog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, stock rules and reports.

pub mod book;

pub use book::BookService;
