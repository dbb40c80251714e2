//! Integration tests for the timecard audit.
//!
//! This test suite drives the public API end to end:
//! - Reading the export and building the shift index
//! - Each check over the fixture export
//! - Text and JSON reports
//! - Interactive menu sessions
//! - Configuration overrides
//! - Error cases

use std::io::Write;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::NamedTempFile;

use timecard_audit::analysis::{IndexSummary, ShiftIndex, run_check};
use timecard_audit::config::{AuditConfig, ConfigLoader, Thresholds};
use timecard_audit::error::AuditError;
use timecard_audit::menu::Session;
use timecard_audit::models::{EmployeeKey, FindingDetail, FindingKind};
use timecard_audit::report::{ReportFormat, write_runs};
use timecard_audit::source::{load_timecard, read_timecard};

// =============================================================================
// Test Helpers
// =============================================================================

const HEADER: &str = "Employee Name,Position ID,Time,Timecard Hours (as Time)";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/timecard.csv")
}

fn fixture_index() -> (ShiftIndex, IndexSummary) {
    let config = AuditConfig::default();
    let loaded = load_timecard(fixture_path(), &config).expect("Failed to load fixture");
    ShiftIndex::from_rows(&loaded.rows, &config.timestamp_format)
}

fn index_from_csv(content: &str) -> ShiftIndex {
    let config = AuditConfig::default();
    let loaded = read_timecard(content.as_bytes(), "inline.csv", &config).unwrap();
    ShiftIndex::from_rows(&loaded.rows, &config.timestamp_format).0
}

fn report(index: &ShiftIndex, check: FindingKind, thresholds: &Thresholds) -> String {
    let run = run_check(index, check, thresholds);
    let mut out = Vec::new();
    write_runs(&mut out, &[run], thresholds, ReportFormat::Text).unwrap();
    String::from_utf8(out).unwrap()
}

fn default_report(index: &ShiftIndex, check: FindingKind) -> String {
    report(index, check, &Thresholds::default())
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// =============================================================================
// SECTION 1: Loading and Indexing
// =============================================================================

#[test]
fn test_fixture_index_summary() {
    let (index, summary) = fixture_index();

    assert_eq!(
        summary,
        IndexSummary {
            accepted: 11,
            skipped: 1,
            employees: 4
        }
    );
    assert_eq!(index.shift_count(), 11);
}

#[test]
fn test_fixture_employees_in_first_seen_order() {
    let (index, _) = fixture_index();

    let keys: Vec<String> = index.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "Alice Walker (Position ID: 100)",
            "Bob Stone (Position ID: 200)",
            "Carol Reyes (Position ID: 300)",
            "Mary-Jane Ortiz (Position ID: 400)",
        ]
    );
}

#[test]
fn test_fixture_shifts_sorted_despite_file_order() {
    let (index, _) = fixture_index();
    let shifts = index
        .get(&EmployeeKey::new("Alice Walker", "100"))
        .unwrap();

    assert_eq!(shifts.len(), 7);
    assert!(shifts.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[test]
fn test_clock_duration_hours_are_parsed() {
    let (index, _) = fixture_index();
    let carol = index.get(&EmployeeKey::new("Carol Reyes", "300")).unwrap();

    assert_eq!(carol[0].worked_hours, Decimal::from(15));
}

// =============================================================================
// SECTION 2: Consecutive Days
// =============================================================================

#[test]
fn test_fixture_consecutive_days_report() {
    let (index, _) = fixture_index();

    assert_eq!(
        default_report(&index, FindingKind::ConsecutiveDays),
        "Alice Walker (Position ID: 100) has worked for 7 consecutive days starting from 03/01/2024\n"
    );
}

#[test]
fn test_six_day_week_reports_summary_line_once() {
    let mut content = String::from(HEADER);
    for day in 1..=6 {
        content.push_str(&format!("\nAlice,100,03/0{}/2024 07:00 AM,8", day));
    }
    content.push_str("\nBob,200,03/01/2024 07:00 AM,8");

    let index = index_from_csv(&content);
    assert_eq!(
        default_report(&index, FindingKind::ConsecutiveDays),
        "None of the employees worked 7 consecutive days\n"
    );
}

#[test]
fn test_two_day_gap_breaks_streak() {
    let mut content = String::from(HEADER);
    for day in [1, 2, 3, 5, 6, 7, 8] {
        content.push_str(&format!("\nAlice,100,03/0{}/2024 07:00 AM,8", day));
    }

    let run = run_check(
        &index_from_csv(&content),
        FindingKind::ConsecutiveDays,
        &Thresholds::default(),
    );
    assert!(run.is_clear());
}

#[test]
fn test_late_night_and_early_morning_count_as_consecutive_days() {
    let mut content = String::from(HEADER);
    // Every shift is more than 24 hours after the previous one except the
    // first pair, yet each falls on the next calendar day.
    let times = [
        "03/01/2024 11:30 PM",
        "03/02/2024 06:00 AM",
        "03/03/2024 11:00 PM",
        "03/04/2024 11:30 PM",
        "03/05/2024 11:45 PM",
        "03/06/2024 11:50 PM",
        "03/07/2024 11:55 PM",
    ];
    for time in times {
        content.push_str(&format!("\nNight Owl,700,{},6", time));
    }

    let run = run_check(
        &index_from_csv(&content),
        FindingKind::ConsecutiveDays,
        &Thresholds::default(),
    );
    assert_eq!(run.findings.len(), 1);
}

// =============================================================================
// SECTION 3: Rest Gaps
// =============================================================================

#[test]
fn test_fixture_rest_gap_report() {
    let (index, _) = fixture_index();

    assert_eq!(
        default_report(&index, FindingKind::RestGap),
        "Bob Stone (Position ID: 200) has less than 10 hours between shifts on 03/01/2024 and 03/01/2024, but greater than 1 hour\n"
    );
}

#[test]
fn test_rest_gap_finding_carries_elapsed_hours() {
    let (index, _) = fixture_index();
    let run = run_check(&index, FindingKind::RestGap, &Thresholds::default());

    match &run.findings[0].detail {
        FindingDetail::RestGap { gap_hours, .. } => assert_eq!(*gap_hours, Decimal::from(5)),
        other => panic!("Expected RestGap, got {:?}", other),
    }
}

#[test]
fn test_rest_gap_bounds_are_exclusive() {
    let content = format!(
        "{HEADER}\n\
         Dana,500,03/01/2024 07:00 AM,4\n\
         Dana,500,03/01/2024 08:00 AM,4\n\
         Dana,500,03/01/2024 06:00 PM,4\n"
    );

    // Exactly 1 hour then exactly 10 hours apart
    let run = run_check(
        &index_from_csv(&content),
        FindingKind::RestGap,
        &Thresholds::default(),
    );
    assert!(run.is_clear());
}

#[test]
fn test_rest_gap_spanning_midnight_names_both_dates() {
    let content = format!(
        "{HEADER}\n\
         Eli,600,03/01/2024 10:00 PM,4\n\
         Eli,600,03/02/2024 03:00 AM,4\n"
    );

    assert_eq!(
        default_report(&index_from_csv(&content), FindingKind::RestGap),
        "Eli (Position ID: 600) has less than 10 hours between shifts on 03/01/2024 and 03/02/2024, but greater than 1 hour\n"
    );
}

// =============================================================================
// SECTION 4: Long Shifts
// =============================================================================

#[test]
fn test_fixture_long_shift_report() {
    let (index, _) = fixture_index();

    assert_eq!(
        default_report(&index, FindingKind::LongShift),
        "Carol Reyes (Position ID: 300) has worked more than 14 hours on 03/01/2024\n"
    );
}

#[test]
fn test_exactly_fourteen_hours_is_not_flagged() {
    let content = format!(
        "{HEADER}\n\
         Finn,800,03/01/2024 06:00 AM,14\n\
         Finn,800,03/02/2024 06:00 AM,14.0001\n"
    );

    let run = run_check(
        &index_from_csv(&content),
        FindingKind::LongShift,
        &Thresholds::default(),
    );
    assert_eq!(run.findings.len(), 1);
    match &run.findings[0].detail {
        FindingDetail::LongShift { worked_hours, .. } => {
            assert_eq!(*worked_hours, Decimal::new(140001, 4))
        }
        other => panic!("Expected LongShift, got {:?}", other),
    }
}

// =============================================================================
// SECTION 5: Reports and Menu
// =============================================================================

#[test]
fn test_json_report_for_multiple_checks() {
    let (index, _) = fixture_index();
    let thresholds = Thresholds::default();
    let runs: Vec<_> = FindingKind::ALL
        .iter()
        .map(|&check| run_check(&index, check, &thresholds))
        .collect();

    let mut out = Vec::new();
    write_runs(&mut out, &runs, &thresholds, ReportFormat::Json).unwrap();
    let value: Value = serde_json::from_slice(&out).unwrap();

    let runs = value.as_array().unwrap();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0]["check"], "consecutive_days");
    assert_eq!(runs[0]["findings"][0]["detail"]["start_date"], "2024-03-01");
    assert_eq!(runs[1]["findings"][0]["employee"]["position_id"], "200");
    assert_eq!(runs[2]["findings"][0]["detail"]["worked_hours"], "15");
    assert!(runs.iter().all(|run| run["employees_scanned"] == 4));
}

#[test]
fn test_menu_session_over_fixture() {
    let (index, _) = fixture_index();
    let thresholds = Thresholds::default();
    let mut output = Vec::new();

    let checks = Session::new(&index, &thresholds)
        .run("1\n2\n3\nx\n4\n".as_bytes(), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(checks, 3);
    assert!(output.contains("Alice Walker (Position ID: 100) has worked for 7 consecutive days"));
    assert!(output.contains("Bob Stone (Position ID: 200) has less than 10 hours"));
    assert!(output.contains("Carol Reyes (Position ID: 300) has worked more than 14 hours"));
    assert!(output.contains("Invalid choice. Please enter a valid option."));
    assert!(output.ends_with("Exiting the program.\n"));
}

// =============================================================================
// SECTION 6: Configuration
// =============================================================================

#[test]
fn test_configured_thresholds_change_findings_and_wording() {
    let config_file = write_temp(
        "thresholds:\n  consecutive_days: 3\n  long_shift_hours: 12\n",
    );
    let loader = ConfigLoader::load(config_file.path()).unwrap();

    let content = format!(
        "{HEADER}\n\
         Gus,900,03/01/2024 07:00 AM,13\n\
         Gus,900,03/02/2024 07:00 AM,8\n\
         Gus,900,03/03/2024 07:00 AM,8\n"
    );
    let index = index_from_csv(&content);

    assert_eq!(
        report(&index, FindingKind::ConsecutiveDays, loader.thresholds()),
        "Gus (Position ID: 900) has worked for 3 consecutive days starting from 03/01/2024\n"
    );
    assert_eq!(
        report(&index, FindingKind::LongShift, loader.thresholds()),
        "Gus (Position ID: 900) has worked more than 12 hours on 03/01/2024\n"
    );
}

#[test]
fn test_configured_columns_and_format() {
    let config_file = write_temp(
        "columns:\n  employee_name: Worker\n  position_id: Role\n  time: Clock In\n  hours: Hours\n\
         timestamp_format: \"%Y-%m-%d %H:%M\"\n\
         delimiter: \";\"\n",
    );
    let loader = ConfigLoader::load(config_file.path()).unwrap();
    let config = loader.config();

    let content = "Worker;Role;Clock In;Hours\nHana;10;2024-03-01 05:00;16\n";
    let loaded = read_timecard(content.as_bytes(), "custom.csv", config).unwrap();
    let (index, summary) = ShiftIndex::from_rows(&loaded.rows, &config.timestamp_format);

    assert_eq!(summary.accepted, 1);
    assert_eq!(
        report(&index, FindingKind::LongShift, loader.thresholds()),
        "Hana (Position ID: 10) has worked more than 14 hours on 03/01/2024\n"
    );
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[test]
fn test_missing_export_is_fatal() {
    let err = load_timecard("does/not/exist.csv", &AuditConfig::default()).unwrap_err();
    assert!(matches!(err, AuditError::SourceNotFound { .. }));
}

#[test]
fn test_missing_column_is_fatal() {
    let file = write_temp(
        "Employee Name,Time,Timecard Hours (as Time)\nAlice,03/01/2024 07:00 AM,8\n",
    );

    let err = load_timecard(file.path(), &AuditConfig::default()).unwrap_err();
    match err {
        AuditError::MissingColumn { column } => assert_eq!(column, "Position ID"),
        other => panic!("Expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config_file = write_temp(
        "thresholds:\n  rest_gap_min_hours: 10\n  rest_gap_max_hours: 1\n",
    );

    let err = ConfigLoader::load(config_file.path()).unwrap_err();
    assert!(matches!(err, AuditError::InvalidConfig { .. }));
}

#[test]
fn test_header_only_export_gives_empty_runs() {
    let index = index_from_csv(HEADER);

    assert!(index.is_empty());
    assert_eq!(default_report(&index, FindingKind::RestGap), "");
    assert_eq!(default_report(&index, FindingKind::LongShift), "");
    assert_eq!(
        default_report(&index, FindingKind::ConsecutiveDays),
        "None of the employees worked 7 consecutive days\n"
    );
}
