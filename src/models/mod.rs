//! Core data models for the library catalog

pub mod book;
pub mod ids;

pub use book::Book;
pub use ids::BookId;
