//! Long-shift detection.

use rust_decimal::Decimal;

use crate::models::{Finding, FindingDetail, ShiftRecord};

/// Shifts with strictly more worked hours than this are reported.
pub const DEFAULT_LONG_SHIFT_HOURS: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// Detects shifts whose worked hours exceed `limit`.
///
/// Each qualifying shift is reported on its own. A shift of exactly
/// `limit` hours is not reported. Order of `shifts` does not matter.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::{detect_long_shifts, DEFAULT_LONG_SHIFT_HOURS};
/// use timecard_audit::models::{EmployeeKey, ShiftRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let carol = EmployeeKey::new("Carol", "300");
/// let shifts = vec![
///     ShiftRecord::new(carol.clone(), at("2024-03-01 06:00"), Decimal::from(15)),
///     ShiftRecord::new(carol.clone(), at("2024-03-02 06:00"), Decimal::from(14)),
/// ];
///
/// assert_eq!(detect_long_shifts(&shifts, DEFAULT_LONG_SHIFT_HOURS).len(), 1);
/// ```
pub fn detect_long_shifts(shifts: &[ShiftRecord], limit: Decimal) -> Vec<Finding> {
    shifts
        .iter()
        .filter(|shift| shift.worked_hours > limit)
        .map(|shift| Finding {
            employee: shift.employee.clone(),
            detail: FindingDetail::LongShift {
                start: shift.start,
                worked_hours: shift.worked_hours,
            },
        })
        .collect()
}
