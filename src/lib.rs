//! riskboard is an interactive terminal dashboard over a fixed risk
//! assessment dataset.
//!
//! The crate is split into a UI-independent [`report`] layer that computes
//! chart specifications (heatmap, scatter, stacked bar, per-record detail)
//! and a [`tui`] layer that renders them with ratatui. The [`cli`] module
//! wires both behind the `riskboard` binary.

#![warn(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
// Chart math mixes u8 severities, usize indices, and f64 values.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Rendering functions read better as single units than split helpers.
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod tui;

pub use error::{ErrorContext, Result, RiskboardError};
pub use model::{RiskLevel, RiskRecord, RiskTable};
pub use report::{Chart, Report, ReportFormat};
pub use tui::{run_dashboard, DashboardApp};
