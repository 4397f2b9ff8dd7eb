//! Audit logging for the library catalog
//!
//! Records every add, update, delete, borrow and return with before/after
//! snapshots in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one audited operation with timestamp, book id and title,
//!   and optional before/after snapshots.
//! - `AuditLogger`: writes entries to the log file as line-delimited JSON.
//! - `generate_diff`: human-readable summary of what changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
