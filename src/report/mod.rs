//! Rendering detection runs for the console.
//!
//! Text output reproduces the familiar one-line-per-finding report; JSON
//! output serializes the runs themselves for downstream tooling.

mod text;

use std::io::Write;

use crate::analysis::DetectionRun;
use crate::config::Thresholds;
use crate::error::AuditResult;

pub use text::{REPORT_DATE_FORMAT, no_streak_line, render_finding, write_text};

/// How detection runs are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One human-readable line per finding.
    #[default]
    Text,
    /// A JSON array with one object per run.
    Json,
}

/// Writes detection runs in the requested format.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::{run_check, ShiftIndex};
/// use timecard_audit::config::Thresholds;
/// use timecard_audit::models::FindingKind;
/// use timecard_audit::report::{write_runs, ReportFormat};
///
/// let thresholds = Thresholds::default();
/// let run = run_check(&ShiftIndex::default(), FindingKind::ConsecutiveDays, &thresholds);
///
/// let mut out = Vec::new();
/// write_runs(&mut out, &[run], &thresholds, ReportFormat::Text)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "None of the employees worked 7 consecutive days\n");
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
pub fn write_runs<W: Write>(
    out: &mut W,
    runs: &[DetectionRun],
    thresholds: &Thresholds,
    format: ReportFormat,
) -> AuditResult<()> {
    match format {
        ReportFormat::Text => {
            for run in runs {
                write_text(out, run, thresholds)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, runs).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
