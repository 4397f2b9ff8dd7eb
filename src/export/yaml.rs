//! YAML Export functionality

use std::io::Write;

use crate::error::{CatalogError, CatalogResult};
use crate::export::json::CatalogExport;
use crate::storage::Storage;

/// Export the catalog to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> CatalogResult<()> {
    let export = CatalogExport::from_storage(storage)?;
    let to_export_err = |e: std::io::Error| CatalogError::Export(e.to_string());

    writeln!(writer, "# Library catalog export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CatalogError::Export(e.to_string()))?;

    Ok(())
}
