//! Configuration module for the library catalog
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CatalogPaths;
pub use settings::Settings;
