//! Timecard audit CLI
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu over the default export
//! timecard-audit
//!
//! # Run checks once and exit
//! timecard-audit timecard.csv --check rest-gap --check long-shift
//!
//! # JSON output with custom thresholds
//! timecard-audit timecard.csv -c audit.yaml --check consecutive-days --format json
//! ```
//!
//! ## Exit Codes
//!
//! - 0: Success
//! - 1: Error

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use timecard_audit::analysis::{IndexSummary, ShiftIndex, run_check};
use timecard_audit::config::ConfigLoader;
use timecard_audit::menu::Session;
use timecard_audit::models::FindingKind;
use timecard_audit::report::{ReportFormat, write_runs};
use timecard_audit::source::{LoadedTimecard, load_timecard};

/// Compliance checks over a timecard export
#[derive(Parser)]
#[command(name = "timecard-audit")]
#[command(version)]
#[command(about = "Flag long streaks, short rest gaps and long shifts in a timecard export")]
#[command(long_about = None)]
struct Cli {
    /// Timecard export to audit (CSV with a header row)
    #[arg(default_value = "Assignment_Timecard.xlsx - Sheet1.csv")]
    file: PathBuf,

    /// YAML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a check and exit instead of showing the menu (can be repeated)
    #[arg(long = "check", value_name = "CHECK")]
    checks: Vec<CheckArg>,

    /// Output format for --check runs [default: text]
    #[arg(short, long, requires = "checks")]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CheckArg {
    ConsecutiveDays,
    RestGap,
    LongShift,
}

impl From<CheckArg> for FindingKind {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::ConsecutiveDays => FindingKind::ConsecutiveDays,
            CheckArg::RestGap => FindingKind::RestGap,
            CheckArg::LongShift => FindingKind::LongShift,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Describes rows dropped while loading, if any.
fn skipped_rows_notice(loaded: &LoadedTimecard, summary: &IndexSummary) -> Option<String> {
    let dropped = summary.skipped + loaded.unreadable_rows;
    (dropped > 0).then(|| {
        format!(
            "Skipped {} of {} rows in {} (run with -v for details)",
            dropped,
            dropped + summary.accepted,
            loaded.source
        )
    })
}

fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let config = loader.config();

    let loaded = load_timecard(&cli.file, config)
        .with_context(|| format!("Failed to read timecard export {}", cli.file.display()))?;
    let (index, summary) = ShiftIndex::from_rows(&loaded.rows, &config.timestamp_format);
    if let Some(notice) = skipped_rows_notice(&loaded, &summary) {
        eprintln!("{}", notice);
    }

    let stdout = io::stdout();

    if cli.checks.is_empty() {
        let stdin = io::stdin();
        Session::new(&index, loader.thresholds())
            .run(stdin.lock(), stdout.lock())
            .context("Menu session failed")?;
        return Ok(());
    }

    let runs: Vec<_> = cli
        .checks
        .iter()
        .map(|&check| run_check(&index, check.into(), loader.thresholds()))
        .collect();

    let mut out = stdout.lock();
    let format = cli.format.unwrap_or(OutputFormat::Text);
    write_runs(&mut out, &runs, loader.thresholds(), format.into())
        .context("Failed to write report")?;
    out.flush()?;

    Ok(())
}
