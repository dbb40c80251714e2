//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the audit
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, AuditResult};

use super::types::{AuditConfig, Thresholds};

/// Loads and provides access to the audit configuration.
///
/// # Example
///
/// ```no_run
/// use timecard_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("Streak length: {}", loader.thresholds().consecutive_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - A value fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let config = Self::load_yaml::<AuditConfig>(path.as_ref())?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AuditConfig) -> AuditResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads the file at `path` when given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> AuditResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AuditResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}").map_err(|e| AuditError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            });
        }

        serde_yaml::from_str(&content).map_err(|e| AuditError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Returns the check thresholds.
    pub fn thresholds(&self) -> &Thresholds {
        &self.config.thresholds
    }
}
