//! Consecutive-days detection.
//!
//! Finds the first run of shifts starting on successive calendar days
//! that reaches the configured streak length.

use crate::models::{Finding, FindingDetail, ShiftRecord};

/// Default streak length in calendar days.
pub const DEFAULT_CONSECUTIVE_DAYS: u32 = 7;

/// Detects the first streak of `days` successive calendar days.
///
/// Walks adjacent shifts keeping a streak counter. A pair whose start dates
/// are exactly one calendar day apart extends the streak; any other
/// difference, including two shifts on the same day, resets it. When the
/// counter reaches `days - 1` the streak is reported and scanning stops, so
/// a later second streak is never reported.
///
/// # Arguments
///
/// * `shifts` - One employee's shifts, sorted ascending by start
/// * `days` - Streak length to report (values below 2 report the first shift)
///
/// # Returns
///
/// `Some(finding)` carrying the start date of the streak's first shift, or
/// `None` if no streak is long enough.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::{detect_consecutive_days, DEFAULT_CONSECUTIVE_DAYS};
/// use timecard_audit::models::{EmployeeKey, FindingDetail, ShiftRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let alice = EmployeeKey::new("Alice", "100");
/// let shifts: Vec<_> = (1..=7)
///     .map(|day| {
///         let start = NaiveDate::from_ymd_opt(2023, 1, day).unwrap().and_hms_opt(9, 0, 0).unwrap();
///         ShiftRecord::new(alice.clone(), start, Decimal::from(8))
///     })
///     .collect();
///
/// let finding = detect_consecutive_days(&shifts, DEFAULT_CONSECUTIVE_DAYS).unwrap();
/// match finding.detail {
///     FindingDetail::ConsecutiveDays { start_date, days } => {
///         assert_eq!(start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
///         assert_eq!(days, 7);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn detect_consecutive_days(shifts: &[ShiftRecord], days: u32) -> Option<Finding> {
    if days < 2 {
        return shifts.first().map(|shift| streak_finding(shift, days));
    }

    let target = (days - 1) as usize;
    let mut streak = 0usize;

    for (offset, pair) in shifts.windows(2).enumerate() {
        let day_difference = (pair[1].date() - pair[0].date()).num_days();
        if day_difference == 1 {
            streak += 1;
        } else {
            streak = 0;
        }

        if streak == target {
            let current = offset + 1;
            return Some(streak_finding(&shifts[current - target], days));
        }
    }

    None
}

fn streak_finding(first: &ShiftRecord, days: u32) -> Finding {
    Finding {
        employee: first.employee.clone(),
        detail: FindingDetail::ConsecutiveDays {
            start_date: first.date(),
            days,
        },
    }
}
