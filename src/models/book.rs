//! Book model
//!
//! A catalog record and its stock rules. Borrowing decreases the available
//! quantity, returning increases it, and the available quantity stays within
//! `0..=initial_quantity`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BookId;
use crate::error::{CatalogError, CatalogResult};

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Copies currently available
    pub quantity: i32,

    /// Copies owned in total; the ceiling for returns
    pub initial_quantity: i32,
}

impl Book {
    /// Create a new book. The supplied quantity is both the available and
    /// the initial quantity.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
            initial_quantity: quantity,
        }
    }

    /// Rebuild a book from stored fields
    pub fn from_parts(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i32,
        initial_quantity: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
            initial_quantity,
        }
    }

    /// Return `amount` copies to stock
    pub fn increase_stock(&mut self, amount: i32) -> CatalogResult<()> {
        if amount <= 0 {
            return Err(CatalogError::Domain(
                "Invalid amount for stock increase.".into(),
            ));
        }

        let exceeds = self
            .quantity
            .checked_add(amount)
            .map_or(true, |total| total > self.initial_quantity);
        if exceeds {
            return Err(CatalogError::Domain(format!(
                "Cannot return {} books. Total would exceed the initial stock of {}.",
                amount, self.initial_quantity
            )));
        }

        self.quantity += amount;
        Ok(())
    }

    /// Take `amount` copies out of stock
    pub fn decrease_stock(&mut self, amount: i32) -> CatalogResult<()> {
        if amount <= 0 {
            return Err(CatalogError::Domain(
                "Invalid amount for stock decrease.".into(),
            ));
        }

        let insufficient = self
            .quantity
            .checked_sub(amount)
            .map_or(true, |remaining| remaining < 0);
        if insufficient {
            return Err(CatalogError::Domain(
                "Not enough stock available for borrowing.".into(),
            ));
        }

        self.quantity -= amount;
        Ok(())
    }

    /// Copies currently out on loan
    pub fn borrowed_count(&self) -> i64 {
        i64::from(self.initial_quantity) - i64::from(self.quantity)
    }

    /// Case-insensitive substring match on title and author.
    ///
    /// A missing or empty filter matches everything for its field.
    pub fn matches(&self, title: Option<&str>, author: Option<&str>) -> bool {
        field_matches(&self.title, title) && field_matches(&self.author, author)
    }
}

fn field_matches(value: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) if f.is_empty() => true,
        Some(f) => value.to_lowercase().contains(&f.to_lowercase()),
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
