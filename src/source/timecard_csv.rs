//! CSV timecard export reader.
//!
//! Reads a delimited export with a header row and maps the configured
//! columns of every data row into a [`RawTimecardRow`]. Values are not
//! interpreted here; the shift index parses and filters them.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::models::RawTimecardRow;

/// Every row of a timecard export, read to completion.
///
/// Holding a `LoadedTimecard` means the whole file has been consumed;
/// nothing downstream sees a partial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTimecard {
    /// Where the rows were read from.
    pub source: String,
    /// Rows in file order.
    pub rows: Vec<RawTimecardRow>,
    /// Rows the CSV layer itself could not decode.
    pub unreadable_rows: usize,
}

/// Header positions of the four required columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    employee_name: usize,
    position_id: usize,
    time: usize,
    hours: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, config: &AuditConfig) -> AuditResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
                .ok_or_else(|| AuditError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            employee_name: find(&config.columns.employee_name)?,
            position_id: find(&config.columns.position_id)?,
            time: find(&config.columns.time)?,
            hours: find(&config.columns.hours)?,
        })
    }

    fn extract(&self, record: &StringRecord, line: u64) -> RawTimecardRow {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();

        RawTimecardRow {
            line,
            employee_name: field(self.employee_name),
            position_id: field(self.position_id),
            time: field(self.time),
            hours: field(self.hours),
        }
    }
}

/// Reads the timecard export at `path`.
///
/// # Errors
///
/// - `SourceNotFound` if the file does not exist
/// - `SourceReadError` if it cannot be opened or its header cannot be read
/// - `MissingColumn` if a configured column is absent from the header
///
/// # Example
///
/// ```no_run
/// use timecard_audit::config::AuditConfig;
/// use timecard_audit::source::load_timecard;
///
/// let loaded = load_timecard("timecard.csv", &AuditConfig::default())?;
/// println!("{} rows", loaded.rows.len());
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
pub fn load_timecard<P: AsRef<Path>>(path: P, config: &AuditConfig) -> AuditResult<LoadedTimecard> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AuditError::SourceNotFound {
            path: path_str.clone(),
        },
        _ => AuditError::SourceReadError {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    read_timecard(file, &path_str, config)
}

/// Reads a timecard export from any reader.
///
/// `source` only labels log lines and errors.
pub fn read_timecard<R: Read>(
    reader: R,
    source: &str,
    config: &AuditConfig,
) -> AuditResult<LoadedTimecard> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AuditError::SourceReadError {
            path: source.to_string(),
            message: e.to_string(),
        })?
        .clone();
    let columns = ColumnIndices::resolve(&headers, config)?;
    debug!(source, ?columns, "Resolved timecard columns");

    let mut rows = Vec::new();
    let mut unreadable_rows = 0;

    for result in csv_reader.records() {
        match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                if record.iter().all(|f| f.is_empty()) {
                    continue;
                }
                rows.push(columns.extract(&record, line));
            }
            Err(err) => {
                unreadable_rows += 1;
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                warn!(source, line, error = %err, "Skipping unreadable timecard row");
            }
        }
    }

    info!(
        source,
        rows = rows.len(),
        unreadable_rows,
        "Finished reading timecard export"
    );

    Ok(LoadedTimecard {
        source: source.to_string(),
        rows,
        unreadable_rows,
    })
}
