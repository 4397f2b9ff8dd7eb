//! Export module for the library catalog
//!
//! - CSV: spreadsheet-compatible book list
//! - JSON: machine-readable full catalog export
//! - YAML: human-readable full catalog export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_books_csv;
pub use json::{export_full_json, CatalogExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
