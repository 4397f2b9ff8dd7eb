//! Audit log CLI command

use crate::error::CatalogResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> CatalogResult<()> {
    let logger = storage.audit();

    if !logger.exists() {
        println!("No audit entries yet.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    println!();
    println!(
        "Showing {} of {} entries ({})",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );

    Ok(())
}
