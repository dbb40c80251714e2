//! Core data models for the timecard audit.
//!
//! This module contains the domain models shared by the loader, the shift
//! index, the detectors and the reports.

mod finding;
mod shift_record;

pub use finding::{Finding, FindingDetail, FindingKind};
pub use shift_record::{EmployeeKey, RawTimecardRow, ShiftRecord};
