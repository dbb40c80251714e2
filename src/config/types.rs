//! Configuration types for the timecard audit.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a
//! default, so an empty file describes the standard export and thresholds.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::analysis::{
    DEFAULT_CONSECUTIVE_DAYS, DEFAULT_LONG_SHIFT_HOURS, DEFAULT_REST_GAP_MAX_HOURS,
    DEFAULT_REST_GAP_MIN_HOURS,
};
use crate::error::{AuditError, AuditResult};

/// Default timestamp layout of the export: `03/01/2024 07:30 AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Limits applied by the three checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Length in calendar days of a streak worth reporting.
    pub consecutive_days: u32,
    /// Rest gaps must be strictly longer than this to be reported.
    pub rest_gap_min_hours: Decimal,
    /// Rest gaps must be strictly shorter than this to be reported.
    pub rest_gap_max_hours: Decimal,
    /// Shifts strictly longer than this are reported.
    pub long_shift_hours: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            consecutive_days: DEFAULT_CONSECUTIVE_DAYS,
            rest_gap_min_hours: DEFAULT_REST_GAP_MIN_HOURS,
            rest_gap_max_hours: DEFAULT_REST_GAP_MAX_HOURS,
            long_shift_hours: DEFAULT_LONG_SHIFT_HOURS,
        }
    }
}

/// Names of the export columns the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// Column holding the employee name.
    pub employee_name: String,
    /// Column holding the position identifier.
    pub position_id: String,
    /// Column holding the clock-in timestamp.
    pub time: String,
    /// Column holding the worked hours.
    pub hours: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            employee_name: "Employee Name".to_string(),
            position_id: "Position ID".to_string(),
            time: "Time".to_string(),
            hours: "Timecard Hours (as Time)".to_string(),
        }
    }
}

/// The complete audit configuration.
///
/// # Example
///
/// ```
/// use timecard_audit::config::AuditConfig;
///
/// let config = AuditConfig::default();
/// assert_eq!(config.thresholds.consecutive_days, 7);
/// assert_eq!(config.columns.position_id, "Position ID");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Check thresholds.
    pub thresholds: Thresholds,
    /// Export column names.
    pub columns: ColumnMapping,
    /// chrono format string for the timestamp column.
    pub timestamp_format: String,
    /// Field delimiter of the export.
    pub delimiter: char,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            columns: ColumnMapping::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            delimiter: ',',
        }
    }
}

impl AuditConfig {
    /// Checks that the configured values can drive the detectors.
    ///
    /// # Returns
    ///
    /// `InvalidConfig` naming the first offending field if:
    /// - the streak length is below 2
    /// - a threshold is negative, or the rest-gap bounds are not increasing
    /// - a column name or the timestamp format is empty
    /// - the delimiter is not a single ASCII character
    pub fn validate(&self) -> AuditResult<()> {
        let t = &self.thresholds;

        if t.consecutive_days < 2 {
            return Err(invalid(
                "thresholds.consecutive_days",
                "must be at least 2",
            ));
        }
        if t.rest_gap_min_hours.is_sign_negative() {
            return Err(invalid(
                "thresholds.rest_gap_min_hours",
                "must not be negative",
            ));
        }
        if t.rest_gap_max_hours <= t.rest_gap_min_hours {
            return Err(invalid(
                "thresholds.rest_gap_max_hours",
                "must be greater than rest_gap_min_hours",
            ));
        }
        if t.long_shift_hours.is_sign_negative() {
            return Err(invalid("thresholds.long_shift_hours", "must not be negative"));
        }

        let columns = [
            ("columns.employee_name", &self.columns.employee_name),
            ("columns.position_id", &self.columns.position_id),
            ("columns.time", &self.columns.time),
            ("columns.hours", &self.columns.hours),
        ];
        for (field, name) in columns {
            if name.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }

        if self.timestamp_format.trim().is_empty() {
            return Err(invalid("timestamp_format", "must not be empty"));
        }
        if !self.delimiter.is_ascii() {
            return Err(invalid("delimiter", "must be a single ASCII character"));
        }

        Ok(())
    }

    /// Returns the delimiter as the byte the CSV reader expects.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

fn invalid(field: &str, message: &str) -> AuditError {
    AuditError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
