//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::Book;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Book was added to the catalog
    Create,
    /// Title, author or quantity was overwritten
    Update,
    /// Book was removed from the catalog
    Delete,
    /// Copies were borrowed
    Borrow,
    /// Copies were returned
    Return,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected book
    pub book_id: String,

    /// Title of the affected book at the time of the operation
    pub title: String,

    /// The book before the operation (updates, deletes, stock moves)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The book after the operation (creates, updates, stock moves)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, book: &Book, before: Option<&Book>, after: Option<&Book>) -> Self {
        let before = before.and_then(|b| serde_json::to_value(b).ok());
        let after = after.and_then(|b| serde_json::to_value(b).ok());
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            book_id: book.id.to_string(),
            title: book.title.clone(),
            before,
            after,
            diff_summary,
        }
    }

    /// Entry for a newly added book
    pub fn create(book: &Book) -> Self {
        Self::new(Operation::Create, book, None, Some(book))
    }

    /// Entry for an overwrite of title, author or quantity
    pub fn update(before: &Book, after: &Book) -> Self {
        Self::new(Operation::Update, after, Some(before), Some(after))
    }

    /// Entry for a deleted book
    pub fn delete(book: &Book) -> Self {
        Self::new(Operation::Delete, book, Some(book), None)
    }

    /// Entry for a borrow or return
    pub fn stock(operation: Operation, before: &Book, after: &Book) -> Self {
        Self::new(operation, after, Some(before), Some(after))
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.book_id,
            self.title
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
