//! Rest-gap detection.
//!
//! Flags adjacent shifts whose start times are closer together than a
//! rest period allows, while ignoring near-duplicate punches.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{Finding, FindingDetail, ShiftRecord};

/// Gaps must be strictly longer than this many hours to be reported.
pub const DEFAULT_REST_GAP_MIN_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Gaps must be strictly shorter than this many hours to be reported.
pub const DEFAULT_REST_GAP_MAX_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Returns the elapsed hours between two timestamps.
///
/// Uses the full date-time difference, not calendar days.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::elapsed_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(elapsed_hours(at("2024-03-01 22:00"), at("2024-03-02 01:30")), Decimal::new(35, 1));
/// ```
pub fn elapsed_hours(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    Decimal::from((to - from).num_seconds()) / Decimal::from(3600)
}

/// Detects short gaps between adjacent shift starts.
///
/// Every adjacent pair whose elapsed hours lie strictly between
/// `min_hours` and `max_hours` is reported. Both bounds are exclusive.
///
/// # Arguments
///
/// * `shifts` - One employee's shifts, sorted ascending by start
/// * `min_hours` - Exclusive lower bound (typically 1)
/// * `max_hours` - Exclusive upper bound (typically 10)
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::{detect_rest_gaps, DEFAULT_REST_GAP_MAX_HOURS, DEFAULT_REST_GAP_MIN_HOURS};
/// use timecard_audit::models::{EmployeeKey, ShiftRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let bob = EmployeeKey::new("Bob", "200");
/// let shifts = vec![
///     ShiftRecord::new(bob.clone(), at("2024-03-01 07:00"), Decimal::from(4)),
///     ShiftRecord::new(bob.clone(), at("2024-03-01 12:00"), Decimal::from(4)),
/// ];
///
/// let findings = detect_rest_gaps(&shifts, DEFAULT_REST_GAP_MIN_HOURS, DEFAULT_REST_GAP_MAX_HOURS);
/// assert_eq!(findings.len(), 1);
/// ```
pub fn detect_rest_gaps(
    shifts: &[ShiftRecord],
    min_hours: Decimal,
    max_hours: Decimal,
) -> Vec<Finding> {
    shifts
        .windows(2)
        .filter_map(|pair| {
            let (first, second) = (&pair[0], &pair[1]);
            let gap_hours = elapsed_hours(first.start, second.start);

            (gap_hours > min_hours && gap_hours < max_hours).then(|| Finding {
                employee: second.employee.clone(),
                detail: FindingDetail::RestGap {
                    first_start: first.start,
                    second_start: second.start,
                    gap_hours,
                },
            })
        })
        .collect()
}
