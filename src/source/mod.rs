//! Record loading for timecard exports.
//!
//! The loader maps configured header names to columns and hands back
//! untyped rows once the whole file is consumed.

mod timecard_csv;

pub use timecard_csv::{LoadedTimecard, load_timecard, read_timecard};
