//! Finding models produced by the detectors.
//!
//! A [`Finding`] names the employee it concerns and carries a
//! [`FindingDetail`] specific to the check that produced it.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeKey;

/// The check that produced a finding.
///
/// # Example
///
/// ```
/// use timecard_audit::models::FindingKind;
///
/// let kind = FindingKind::RestGap;
/// assert_eq!(format!("{:?}", kind), "RestGap");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A run of shifts on successive calendar days.
    ConsecutiveDays,
    /// Too little time between two shift starts.
    RestGap,
    /// A single shift with too many worked hours.
    LongShift,
}

impl FindingKind {
    /// All kinds in menu order.
    pub const ALL: [FindingKind; 3] = [
        FindingKind::ConsecutiveDays,
        FindingKind::RestGap,
        FindingKind::LongShift,
    ];
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::ConsecutiveDays => write!(f, "consecutive_days"),
            FindingKind::RestGap => write!(f, "rest_gap"),
            FindingKind::LongShift => write!(f, "long_shift"),
        }
    }
}

/// Check-specific details of a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingDetail {
    /// The employee worked `days` calendar days in a row.
    ConsecutiveDays {
        /// The date of the first shift in the streak.
        start_date: NaiveDate,
        /// The length of the streak in calendar days.
        days: u32,
    },
    /// Two adjacent shifts started too close together.
    RestGap {
        /// Start of the earlier shift.
        first_start: NaiveDateTime,
        /// Start of the later shift.
        second_start: NaiveDateTime,
        /// Elapsed hours between the two starts.
        gap_hours: Decimal,
    },
    /// One shift recorded more hours than allowed.
    LongShift {
        /// Start of the over-long shift.
        start: NaiveDateTime,
        /// Hours recorded for the shift.
        worked_hours: Decimal,
    },
}

/// One reportable result from a detector.
///
/// # Example
///
/// ```
/// use timecard_audit::models::{EmployeeKey, Finding, FindingDetail, FindingKind};
/// use chrono::NaiveDate;
///
/// let finding = Finding {
///     employee: EmployeeKey::new("Alice", "100"),
///     detail: FindingDetail::ConsecutiveDays {
///         start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         days: 7,
///     },
/// };
/// assert_eq!(finding.kind(), FindingKind::ConsecutiveDays);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// The employee-position pairing the finding concerns.
    pub employee: EmployeeKey,
    /// What was found.
    pub detail: FindingDetail,
}

impl Finding {
    /// Returns which check produced this finding.
    pub fn kind(&self) -> FindingKind {
        match self.detail {
            FindingDetail::ConsecutiveDays { .. } => FindingKind::ConsecutiveDays,
            FindingDetail::RestGap { .. } => FindingKind::RestGap,
            FindingDetail::LongShift { .. } => FindingKind::LongShift,
        }
    }
}
