//! Error types for the timecard audit.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading configuration, reading a
//! timecard export or parsing its rows.

use thiserror::Error;

/// The main error type for the timecard audit.
///
/// Loading and configuration operations return this error type. Detectors
/// never fail: malformed rows are dropped before analysis.
///
/// # Example
///
/// ```
/// use timecard_audit::error::AuditError;
///
/// let error = AuditError::SourceNotFound {
///     path: "timecard.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Timecard file not found: timecard.csv");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The timecard export does not exist.
    #[error("Timecard file not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The timecard export exists but could not be read.
    #[error("Failed to read timecard file '{path}': {message}")]
    SourceReadError {
        /// The path of the export.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The export header lacks a required column.
    #[error("Timecard header is missing required column '{column}'")]
    MissingColumn {
        /// The configured column name that was not found.
        column: String,
    },

    /// A single row could not be turned into a shift record.
    #[error("Malformed record on line {line}, field '{field}': {message}")]
    MalformedRecord {
        /// The 1-based line number in the source file.
        line: u64,
        /// The field that failed to parse.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Reading the menu input or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
