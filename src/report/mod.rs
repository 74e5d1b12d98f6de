//! Chart specifications and report generation.
//!
//! The chart spec types in [`charts`] are the single source of truth for
//! what each visualization contains; both the TUI views and the
//! non-interactive reporters consume them.

mod charts;
pub mod color;
mod render;

pub use charts::{
    Chart, DetailBar, DetailSpec, HeatmapPoint, HeatmapSpec, Report, ScatterPoint, ScatterSpec,
    StackedBar, StackedBarSpec, SCATTER_X_BOUNDS, SCATTER_Y_BOUNDS,
};
pub use color::{id_color, score_color, score_color_rgb};
pub use render::{create_reporter, ReportFormat, Reporter};
