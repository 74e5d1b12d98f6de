//! Report command handler.
//!
//! Implements the `report` subcommand for non-interactive output.

use crate::error::ErrorContext;
use crate::model::RiskTable;
use crate::report::{create_reporter, ReportFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the report command.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output format.
    pub format: ReportFormat,
    /// Output file path (stdout if not specified).
    pub output: Option<PathBuf>,
    /// Narrow to a single record's detail report.
    pub record: Option<String>,
}

/// Run the report command.
///
/// An unknown `--record` id still succeeds: the detail report is simply
/// empty, matching the dashboard's behavior.
pub fn run_report(config: &ReportConfig) -> Result<i32> {
    let table = RiskTable::builtin();

    let reporter = create_reporter(config.format);
    let report = reporter.generate(&table, config.record.as_deref())?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &report).at_path(path.clone())?;
            tracing::info!("report written to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(super::exit_codes::SUCCESS)
}
