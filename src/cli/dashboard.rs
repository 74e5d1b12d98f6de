//! Dashboard command handler.
//!
//! Implements the `dashboard` subcommand (also the default command).

use crate::model::RiskTable;
use crate::tui::{run_dashboard, DashboardApp};
use anyhow::Result;

/// Configuration for the dashboard command.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Initial theme override ("dark" or "light"); saved preferences
    /// apply when unset.
    pub theme: Option<String>,
}

/// Run the dashboard command.
pub fn run_dashboard_command(config: &DashboardConfig) -> Result<i32> {
    let table = RiskTable::builtin();
    tracing::debug!(records = table.len(), "loaded builtin risk table");

    let mut app = DashboardApp::new(table);
    run_dashboard(&mut app, config.theme.as_deref())?;

    Ok(super::exit_codes::SUCCESS)
}
