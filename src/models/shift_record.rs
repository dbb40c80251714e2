//! Shift record model and related types.
//!
//! This module defines the [`EmployeeKey`] used to group shifts, the typed
//! [`ShiftRecord`] the detectors operate on, and the untyped
//! [`RawTimecardRow`] produced by the record loader.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one employee-position pairing.
///
/// The same person holding two positions is two distinct keys and is
/// analyzed independently per position.
///
/// # Example
///
/// ```
/// use timecard_audit::models::EmployeeKey;
///
/// let nurse = EmployeeKey::new("Alice", "100");
/// let cook = EmployeeKey::new("Alice", "200");
/// assert_ne!(nurse, cook);
/// assert_eq!(nurse.to_string(), "Alice (Position ID: 100)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeKey {
    /// The employee's name as it appears in the export.
    pub name: String,
    /// The position identifier as it appears in the export.
    pub position_id: String,
}

impl EmployeeKey {
    /// Creates a key from a name and position identifier.
    pub fn new(name: impl Into<String>, position_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position_id: position_id.into(),
        }
    }
}

impl fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Position ID: {})", self.name, self.position_id)
    }
}

/// A single worked shift for one employee-position pairing.
///
/// Shift records are immutable once produced by the shift index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Who worked the shift.
    pub employee: EmployeeKey,
    /// When the shift started (minute precision).
    pub start: NaiveDateTime,
    /// Hours recorded against the shift.
    pub worked_hours: Decimal,
}

impl ShiftRecord {
    /// Creates a shift record.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_audit::models::{EmployeeKey, ShiftRecord};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftRecord::new(
    ///     EmployeeKey::new("Carol", "300"),
    ///     NaiveDateTime::parse_from_str("2024-03-01 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     Decimal::new(150, 1),
    /// );
    /// assert_eq!(shift.date().to_string(), "2024-03-01");
    /// ```
    pub fn new(employee: EmployeeKey, start: NaiveDateTime, worked_hours: Decimal) -> Self {
        Self {
            employee,
            start,
            worked_hours,
        }
    }

    /// Returns the calendar date the shift started on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// One row of a timecard export before any parsing of its values.
///
/// The loader only maps columns; the shift index decides whether the
/// values are usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimecardRow {
    /// The 1-based line number in the source file.
    pub line: u64,
    /// Employee name column.
    pub employee_name: String,
    /// Position identifier column.
    pub position_id: String,
    /// Clock-in timestamp column, unparsed.
    pub time: String,
    /// Worked hours column, unparsed.
    pub hours: String,
}
