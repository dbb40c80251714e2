//! Running one check across every employee.
//!
//! Each call produces a fresh [`DetectionRun`]; nothing is carried over
//! between runs, so "did anyone qualify" is answered from the run itself.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Thresholds;
use crate::models::{Finding, FindingKind};

use super::{ShiftIndex, detect_consecutive_days, detect_long_shifts, detect_rest_gaps};

/// The outcome of running one check over a shift index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionRun {
    /// Identifies this run in logs.
    pub run_id: Uuid,
    /// The check that was run.
    pub check: FindingKind,
    /// Number of employee-position pairings examined.
    pub employees_scanned: usize,
    /// Findings in employee order, then shift order.
    pub findings: Vec<Finding>,
}

impl DetectionRun {
    /// Returns true if no employee qualified in this run.
    pub fn is_clear(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of distinct employee-position pairings with at least one finding.
    pub fn employees_flagged(&self) -> usize {
        let mut flagged = 0;
        let mut previous = None;
        for finding in &self.findings {
            if previous != Some(&finding.employee) {
                flagged += 1;
                previous = Some(&finding.employee);
            }
        }
        flagged
    }
}

/// Runs one check over every employee in `index`.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::{run_check, ShiftIndex};
/// use timecard_audit::config::Thresholds;
/// use timecard_audit::models::FindingKind;
///
/// let run = run_check(&ShiftIndex::default(), FindingKind::ConsecutiveDays, &Thresholds::default());
/// assert!(run.is_clear());
/// assert_eq!(run.employees_scanned, 0);
/// ```
pub fn run_check(index: &ShiftIndex, check: FindingKind, thresholds: &Thresholds) -> DetectionRun {
    let run_id = Uuid::new_v4();
    let mut findings = Vec::new();

    for (employee, shifts) in index.iter() {
        let before = findings.len();

        match check {
            FindingKind::ConsecutiveDays => {
                findings.extend(detect_consecutive_days(shifts, thresholds.consecutive_days));
            }
            FindingKind::RestGap => {
                findings.extend(detect_rest_gaps(
                    shifts,
                    thresholds.rest_gap_min_hours,
                    thresholds.rest_gap_max_hours,
                ));
            }
            FindingKind::LongShift => {
                findings.extend(detect_long_shifts(shifts, thresholds.long_shift_hours));
            }
        }

        if findings.len() > before {
            debug!(
                run_id = %run_id,
                check = %check,
                employee = %employee,
                count = findings.len() - before,
                "Employee flagged"
            );
        }
    }

    let run = DetectionRun {
        run_id,
        check,
        employees_scanned: index.len(),
        findings,
    };

    info!(
        run_id = %run.run_id,
        check = %run.check,
        employees = run.employees_scanned,
        flagged = run.employees_flagged(),
        findings = run.findings.len(),
        "Check completed"
    );

    run
}
