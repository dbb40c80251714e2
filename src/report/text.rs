//! Plain-text rendering of findings.

use std::io::Write;

use rust_decimal::Decimal;

use crate::analysis::DetectionRun;
use crate::config::Thresholds;
use crate::error::AuditResult;
use crate::models::{Finding, FindingDetail, FindingKind};

/// Date layout used in report lines.
pub const REPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Renders one finding as a report line.
///
/// # Example
///
/// ```
/// use timecard_audit::config::Thresholds;
/// use timecard_audit::models::{EmployeeKey, Finding, FindingDetail};
/// use timecard_audit::report::render_finding;
/// use chrono::NaiveDate;
///
/// let finding = Finding {
///     employee: EmployeeKey::new("Alice", "100"),
///     detail: FindingDetail::ConsecutiveDays {
///         start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         days: 7,
///     },
/// };
/// assert_eq!(
///     render_finding(&finding, &Thresholds::default()),
///     "Alice (Position ID: 100) has worked for 7 consecutive days starting from 03/01/2024"
/// );
/// ```
pub fn render_finding(finding: &Finding, thresholds: &Thresholds) -> String {
    let employee = &finding.employee;

    match &finding.detail {
        FindingDetail::ConsecutiveDays { start_date, days } => format!(
            "{} has worked for {} consecutive days starting from {}",
            employee,
            days,
            start_date.format(REPORT_DATE_FORMAT)
        ),
        FindingDetail::RestGap {
            first_start,
            second_start,
            ..
        } => format!(
            "{} has less than {} between shifts on {} and {}, but greater than {}",
            employee,
            hours_phrase(thresholds.rest_gap_max_hours),
            first_start.format(REPORT_DATE_FORMAT),
            second_start.format(REPORT_DATE_FORMAT),
            hours_phrase(thresholds.rest_gap_min_hours)
        ),
        FindingDetail::LongShift { start, .. } => format!(
            "{} has worked more than {} on {}",
            employee,
            hours_phrase(thresholds.long_shift_hours),
            start.format(REPORT_DATE_FORMAT)
        ),
    }
}

/// The line printed when a consecutive-days run flags nobody.
pub fn no_streak_line(thresholds: &Thresholds) -> String {
    format!(
        "None of the employees worked {} consecutive days",
        thresholds.consecutive_days
    )
}

/// Writes a run as report lines.
///
/// Consecutive-days runs with no findings write one summary line; the
/// other checks write nothing when clear.
pub fn write_text<W: Write>(
    out: &mut W,
    run: &DetectionRun,
    thresholds: &Thresholds,
) -> AuditResult<()> {
    for finding in &run.findings {
        writeln!(out, "{}", render_finding(finding, thresholds))?;
    }

    if run.check == FindingKind::ConsecutiveDays && run.is_clear() {
        writeln!(out, "{}", no_streak_line(thresholds))?;
    }

    Ok(())
}

fn hours_phrase(hours: Decimal) -> String {
    let hours = hours.normalize();
    if hours == Decimal::ONE {
        format!("{} hour", hours)
    } else {
        format!("{} hours", hours)
    }
}
