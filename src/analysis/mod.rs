//! Shift analysis for the timecard audit.
//!
//! This module groups shift records into per-employee sequences and holds
//! the three compliance checks: consecutive calendar days worked, short
//! rest gaps between shifts, and single shifts over the hour limit.

mod consecutive_days;
mod long_shift;
mod rest_gap;
mod runner;
mod shift_index;

pub use consecutive_days::{DEFAULT_CONSECUTIVE_DAYS, detect_consecutive_days};
pub use long_shift::{DEFAULT_LONG_SHIFT_HOURS, detect_long_shifts};
pub use rest_gap::{
    DEFAULT_REST_GAP_MAX_HOURS, DEFAULT_REST_GAP_MIN_HOURS, detect_rest_gaps, elapsed_hours,
};
pub use runner::{DetectionRun, run_check};
pub use shift_index::{IndexSummary, ShiftIndex, parse_hours, parse_row};
