//! Employee shift index.
//!
//! Groups shift records by (name, position) and sorts each group
//! chronologically so the detectors can walk adjacent pairs.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{AuditError, AuditResult};
use crate::models::{EmployeeKey, RawTimecardRow, ShiftRecord};

/// Counts describing how an index was built from raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndexSummary {
    /// Rows turned into shift records.
    pub accepted: usize,
    /// Rows dropped because a value could not be parsed.
    pub skipped: usize,
    /// Distinct employee-position pairings.
    pub employees: usize,
}

/// Shift records grouped per employee-position pairing.
///
/// Employees keep the order in which they first appeared in the input.
/// Each employee's shifts are sorted ascending by start time; shifts with
/// identical start times keep their input order.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::ShiftIndex;
/// use timecard_audit::models::{EmployeeKey, ShiftRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let alice = EmployeeKey::new("Alice", "100");
///
/// let index = ShiftIndex::from_records(vec![
///     ShiftRecord::new(alice.clone(), at("2024-03-02 07:00"), Decimal::from(8)),
///     ShiftRecord::new(alice.clone(), at("2024-03-01 07:00"), Decimal::from(8)),
/// ]);
///
/// let shifts = index.get(&alice).unwrap();
/// assert_eq!(shifts[0].start, at("2024-03-01 07:00"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftIndex {
    groups: Vec<(EmployeeKey, Vec<ShiftRecord>)>,
    positions: HashMap<EmployeeKey, usize>,
}

impl ShiftIndex {
    /// Builds an index from already-typed shift records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ShiftRecord>,
    {
        let mut index = Self::default();
        for record in records {
            index.insert(record);
        }
        index.sort_groups();
        index
    }

    /// Builds an index from raw export rows.
    ///
    /// Rows whose timestamp or hours cannot be parsed are dropped with a
    /// warning; they never abort the build.
    ///
    /// # Arguments
    ///
    /// * `rows` - Rows in file order
    /// * `timestamp_format` - chrono format of the time column
    pub fn from_rows(rows: &[RawTimecardRow], timestamp_format: &str) -> (Self, IndexSummary) {
        let mut index = Self::default();
        let mut summary = IndexSummary::default();

        for row in rows {
            match parse_row(row, timestamp_format) {
                Ok(record) => {
                    index.insert(record);
                    summary.accepted += 1;
                }
                Err(err) => {
                    summary.skipped += 1;
                    warn!(
                        line = row.line,
                        employee = %row.employee_name,
                        error = %err,
                        "Skipping malformed timecard row"
                    );
                }
            }
        }

        index.sort_groups();
        summary.employees = index.len();

        info!(
            accepted = summary.accepted,
            skipped = summary.skipped,
            employees = summary.employees,
            "Built employee shift index"
        );

        (index, summary)
    }

    fn insert(&mut self, record: ShiftRecord) {
        match self.positions.get(&record.employee) {
            Some(&position) => self.groups[position].1.push(record),
            None => {
                self.positions
                    .insert(record.employee.clone(), self.groups.len());
                self.groups.push((record.employee.clone(), vec![record]));
            }
        }
    }

    fn sort_groups(&mut self) {
        for (_, shifts) in &mut self.groups {
            // sort_by_key is stable: equal start times keep input order
            shifts.sort_by_key(|shift| shift.start);
        }
    }

    /// Returns the sorted shifts of one employee-position pairing.
    pub fn get(&self, employee: &EmployeeKey) -> Option<&[ShiftRecord]> {
        self.positions
            .get(employee)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Iterates employees in first-seen order with their sorted shifts.
    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeKey, &[ShiftRecord])> {
        self.groups
            .iter()
            .map(|(employee, shifts)| (employee, shifts.as_slice()))
    }

    /// Number of distinct employee-position pairings.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no shift was indexed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of shifts across all employees.
    pub fn shift_count(&self) -> usize {
        self.groups.iter().map(|(_, shifts)| shifts.len()).sum()
    }
}

/// Parses one raw row into a shift record.
pub fn parse_row(row: &RawTimecardRow, timestamp_format: &str) -> AuditResult<ShiftRecord> {
    let start = NaiveDateTime::parse_from_str(row.time.trim(), timestamp_format).map_err(|e| {
        AuditError::MalformedRecord {
            line: row.line,
            field: "time".to_string(),
            message: format!("'{}': {}", row.time, e),
        }
    })?;

    let worked_hours = parse_hours(&row.hours).map_err(|message| AuditError::MalformedRecord {
        line: row.line,
        field: "hours".to_string(),
        message,
    })?;

    Ok(ShiftRecord::new(
        EmployeeKey::new(row.employee_name.as_str(), row.position_id.as_str()),
        start,
        worked_hours,
    ))
}

/// Parses a worked-hours value.
///
/// Accepts a decimal number of hours (`8.5`) or a clock duration
/// (`8:30`, minutes below 60). Negative values are rejected.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::parse_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_hours("8.5").unwrap(), Decimal::new(85, 1));
/// assert_eq!(parse_hours("8:30").unwrap(), Decimal::new(85, 1));
/// assert!(parse_hours("-1").is_err());
/// ```
pub fn parse_hours(value: &str) -> Result<Decimal, String> {
    let value = value.trim();

    let hours = match value.split_once(':') {
        Some((h, m)) => {
            let h: u32 = h
                .trim()
                .parse()
                .map_err(|_| format!("'{}': invalid hour component", value))?;
            let m: u32 = m
                .trim()
                .parse()
                .map_err(|_| format!("'{}': invalid minute component", value))?;
            if m >= 60 {
                return Err(format!("'{}': minutes must be below 60", value));
            }
            (Decimal::from(h) + Decimal::from(m) / Decimal::from(60)).normalize()
        }
        None => Decimal::from_str(value).map_err(|e| format!("'{}': {}", value, e))?,
    };

    if hours.is_sign_negative() && !hours.is_zero() {
        return Err(format!("'{}': hours must not be negative", value));
    }

    Ok(hours)
}
