//! Interactive menu for running checks on demand.
//!
//! The session reads one choice per line from any `BufRead` and writes the
//! menu and reports to any `Write`, so it runs the same against a terminal
//! or an in-memory buffer.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::analysis::{ShiftIndex, run_check};
use crate::config::Thresholds;
use crate::error::AuditResult;
use crate::models::FindingKind;
use crate::report::write_text;

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run a check over every employee.
    Run(FindingKind),
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses a line of input as a menu number.
    ///
    /// Surrounding whitespace is ignored; anything other than 1-4 is
    /// rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_audit::menu::MenuChoice;
    /// use timecard_audit::models::FindingKind;
    ///
    /// assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::Run(FindingKind::RestGap)));
    /// assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    /// assert_eq!(MenuChoice::parse("five"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Run(FindingKind::ConsecutiveDays)),
            2 => Some(Self::Run(FindingKind::RestGap)),
            3 => Some(Self::Run(FindingKind::LongShift)),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Writes the numbered menu and the prompt.
pub fn write_menu<W: Write>(out: &mut W, thresholds: &Thresholds) -> AuditResult<()> {
    writeln!(out, "Menu:")?;
    writeln!(
        out,
        "1. Analyze {} Consecutive Days",
        thresholds.consecutive_days
    )?;
    writeln!(out, "2. Analyze Hours Between Shifts")?;
    writeln!(
        out,
        "3. Analyze Single Shift More Than {} Hours",
        thresholds.long_shift_hours.normalize()
    )?;
    writeln!(out, "4. Exit")?;
    writeln!(out, "Enter your choice:")?;
    out.flush()?;
    Ok(())
}

/// An interactive session over a loaded shift index.
///
/// # Example
///
/// ```
/// use timecard_audit::analysis::ShiftIndex;
/// use timecard_audit::config::Thresholds;
/// use timecard_audit::menu::Session;
///
/// let index = ShiftIndex::default();
/// let thresholds = Thresholds::default();
/// let mut output = Vec::new();
///
/// Session::new(&index, &thresholds).run("1\n4\n".as_bytes(), &mut output)?;
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("None of the employees worked 7 consecutive days"));
/// assert!(output.ends_with("Exiting the program.\n"));
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    index: &'a ShiftIndex,
    thresholds: &'a Thresholds,
}

impl<'a> Session<'a> {
    /// Creates a session over an index that is fully loaded.
    pub fn new(index: &'a ShiftIndex, thresholds: &'a Thresholds) -> Self {
        Self { index, thresholds }
    }

    /// Runs the menu loop until the exit choice or end of input.
    ///
    /// Input lines that are not valid UTF-8 are treated as invalid choices.
    ///
    /// # Returns
    ///
    /// The number of checks that were run.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> AuditResult<usize> {
        let mut checks_run = 0;
        let mut buf = Vec::new();

        loop {
            write_menu(&mut output, self.thresholds)?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Menu input closed");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Run(check)) => {
                    let run = run_check(self.index, check, self.thresholds);
                    write_text(&mut output, &run, self.thresholds)?;
                    checks_run += 1;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Exiting the program.")?;
                    break;
                }
                None => {
                    debug!(input = line.trim(), "Rejected menu input");
                    writeln!(output, "Invalid choice. Please enter a valid option.")?;
                }
            }
        }

        output.flush()?;
        info!(checks_run, "Menu session ended");
        Ok(checks_run)
    }
}
