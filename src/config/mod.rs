//! Configuration loading and management for the timecard audit.
//!
//! This module loads check thresholds, export column names and the
//! timestamp format from a YAML file, falling back to defaults that match
//! the standard timecard export.
//!
//! # Example
//!
//! ```no_run
//! use timecard_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Long shift limit: {}", config.thresholds().long_shift_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AuditConfig, ColumnMapping, DEFAULT_TIMESTAMP_FORMAT, Thresholds};
