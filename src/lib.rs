//! Timecard compliance audit
//!
//! This crate reads a timecard export, groups clock-in rows into
//! per-employee shift sequences and runs three compliance checks over them:
//! seven consecutive calendar days worked, short rest gaps between shifts,
//! and single shifts longer than fourteen hours.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod report;
pub mod source;
