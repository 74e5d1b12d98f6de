//! Chart specification layer.
//!
//! Charts are built as plain data first and rendered by the TUI or the
//! report emitters afterwards. All observable chart semantics (point
//! counts, axis bounds, bar heights, label formats) live here, where they
//! can be tested without a terminal.

use crate::model::{RiskLevel, RiskTable};
use serde::Serialize;
use tracing::debug;

/// Fixed scatter x-axis bounds (severity), independent of the data.
pub const SCATTER_X_BOUNDS: [f64; 2] = [0.0, 6.0];
/// Fixed scatter y-axis bounds (probability), independent of the data.
pub const SCATTER_Y_BOUNDS: [f64; 2] = [0.0, 1.0];

/// A single annotated heatmap cell.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapPoint {
    pub id: String,
    pub severity: u8,
    pub probability: f64,
    pub score: f64,
    /// Score normalized against the table maximum, drives the color scale.
    pub normalized: f64,
    /// RGB color from the green/yellow/red scale.
    pub color: (u8, u8, u8),
    /// Annotation text shown on the cell: id plus score.
    pub annotation: String,
}

/// Severity x probability heatmap colored by impact score.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub colorbar_title: String,
    pub points: Vec<HeatmapPoint>,
}

impl HeatmapSpec {
    /// Build the heatmap from the table: one point per record, keyed at
    /// (severity, probability). Duplicate coordinates keep separate points.
    #[must_use]
    pub fn build(table: &RiskTable) -> Self {
        let points = table
            .records()
            .map(|record| {
                let normalized = table.normalized_score(record.score);
                HeatmapPoint {
                    id: record.id.clone(),
                    severity: record.severity,
                    probability: record.probability,
                    score: record.score,
                    normalized,
                    color: super::color::score_color(normalized),
                    annotation: format!("{} {:.2}", record.id, record.score),
                }
            })
            .collect::<Vec<_>>();

        debug!(points = points.len(), "built heatmap spec");

        Self {
            title: "Heatmap for All Features".to_string(),
            x_title: "Severity Level".to_string(),
            y_title: "Probability of Issue".to_string(),
            colorbar_title: "Impact Score".to_string(),
            points,
        }
    }
}

/// A single scatter marker.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub id: String,
    /// Severity, plotted on x.
    pub x: f64,
    /// Probability, plotted on y.
    pub y: f64,
    /// Marker size source (the record's score).
    pub size: f64,
    /// Stable palette index for per-id color.
    pub color_index: usize,
}

/// Severity vs probability scatter with score-sized, id-colored markers.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSpec {
    pub x_title: String,
    pub y_title: String,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// Build the scatter plot. Axis bounds are always
    /// [`SCATTER_X_BOUNDS`] / [`SCATTER_Y_BOUNDS`], whatever the data.
    #[must_use]
    pub fn build(table: &RiskTable) -> Self {
        let points = table
            .records()
            .enumerate()
            .map(|(index, record)| ScatterPoint {
                id: record.id.clone(),
                x: f64::from(record.severity),
                y: record.probability,
                size: record.score,
                color_index: index,
            })
            .collect::<Vec<_>>();

        debug!(points = points.len(), "built scatter spec");

        Self {
            x_title: "Severity Level".to_string(),
            y_title: "Probability of Issue".to_string(),
            x_bounds: SCATTER_X_BOUNDS,
            y_bounds: SCATTER_Y_BOUNDS,
            points,
        }
    }
}

/// One bar in the stacked chart: a record's total score, colored by level.
#[derive(Debug, Clone, Serialize)]
pub struct StackedBar {
    pub id: String,
    /// Bar height: the record's score.
    pub height: f64,
    pub risk_level: RiskLevel,
}

/// One bar per record, height equal to score, colored by risk level.
#[derive(Debug, Clone, Serialize)]
pub struct StackedBarSpec {
    pub bars: Vec<StackedBar>,
    /// Risk levels present in the data, for the legend.
    pub legend: Vec<RiskLevel>,
}

impl StackedBarSpec {
    #[must_use]
    pub fn build(table: &RiskTable) -> Self {
        let bars = table
            .records()
            .map(|record| StackedBar {
                id: record.id.clone(),
                height: record.score,
                risk_level: record.risk_level,
            })
            .collect::<Vec<_>>();

        let legend = RiskLevel::all()
            .into_iter()
            .filter(|level| bars.iter().any(|b| b.risk_level == *level))
            .collect();

        debug!(bars = bars.len(), "built stacked bar spec");

        Self { bars, legend }
    }
}

/// One bar in the per-record detail chart.
#[derive(Debug, Clone, Serialize)]
pub struct DetailBar {
    /// Metric name: "Severity", "Probability" or "Score".
    pub metric: &'static str,
    pub value: f64,
    /// Value formatted to exactly two decimal places.
    pub label: String,
}

/// Three-bar breakdown of a single record's metrics.
///
/// An unknown id produces a spec with zero bars; that is not an error and
/// the empty spec still renders (as an empty chart).
#[derive(Debug, Clone, Serialize)]
pub struct DetailSpec {
    pub record_id: String,
    pub title: String,
    pub bars: Vec<DetailBar>,
}

impl DetailSpec {
    #[must_use]
    pub fn build(table: &RiskTable, id: &str) -> Self {
        let bars = table.get(id).map_or_else(Vec::new, |record| {
            vec![
                DetailBar::new("Severity", f64::from(record.severity)),
                DetailBar::new("Probability", record.probability),
                DetailBar::new("Score", record.score),
            ]
        });

        debug!(record = id, bars = bars.len(), "built detail spec");

        Self {
            record_id: id.to_string(),
            title: format!("Feature {id} Risk Metrics"),
            bars,
        }
    }
}

impl DetailBar {
    fn new(metric: &'static str, value: f64) -> Self {
        Self {
            metric,
            value,
            label: format!("{value:.2}"),
        }
    }
}

/// A built chart of any kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Heatmap(HeatmapSpec),
    Scatter(ScatterSpec),
    StackedBar(StackedBarSpec),
    Detail(DetailSpec),
}

impl Chart {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heatmap(_) => "heatmap",
            Self::Scatter(_) => "scatter",
            Self::StackedBar(_) => "stacked_bar",
            Self::Detail(_) => "detail",
        }
    }
}

/// Chart construction entry points.
pub struct Report;

impl Report {
    /// Build the three overview charts in their fixed order:
    /// heatmap, then scatter, then stacked bar.
    #[must_use]
    pub fn render_all(table: &RiskTable) -> Vec<Chart> {
        vec![
            Chart::Heatmap(HeatmapSpec::build(table)),
            Chart::Scatter(ScatterSpec::build(table)),
            Chart::StackedBar(StackedBarSpec::build(table)),
        ]
    }

    /// Build the detail chart for a single record id.
    #[must_use]
    pub fn render_detail(table: &RiskTable, id: &str) -> Chart {
        Chart::Detail(DetailSpec::build(table, id))
    }
}
