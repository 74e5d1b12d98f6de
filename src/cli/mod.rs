//! Command handlers for the CLI.

mod dashboard;
mod report;

pub use dashboard::{run_dashboard_command, DashboardConfig};
pub use report::{run_report, ReportConfig};

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
}
