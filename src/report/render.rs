//! Non-interactive report output (text and JSON).

use super::charts::{Chart, Report};
use crate::error::{Result, RiskboardError};
use crate::model::RiskTable;
use serde::Serialize;

/// Output format for the `report` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text table
    Table,
    /// Machine-readable JSON (records plus chart specs)
    Json,
}

/// Generates a report in a specific output format.
pub trait Reporter {
    /// Generate the full report, optionally narrowed to one record.
    fn generate(&self, table: &RiskTable, record: Option<&str>) -> Result<String>;
}

/// Create a reporter for the given format.
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Table => Box::new(TextReporter),
        ReportFormat::Json => Box::new(JsonReporter),
    }
}

struct TextReporter;

impl Reporter for TextReporter {
    fn generate(&self, table: &RiskTable, record: Option<&str>) -> Result<String> {
        let mut out = String::new();

        if let Some(id) = record {
            render_detail_text(&mut out, table, id);
            return Ok(out);
        }

        out.push_str("Risk Assessment Report\n");
        out.push_str("======================\n\n");
        out.push_str("ID  Severity  Probability  Score  Risk level\n");
        out.push_str("--  --------  -----------  -----  ----------\n");
        for r in table.records() {
            out.push_str(&format!(
                "{:<3} {:<9} {:<12.2} {:<6.2} {}\n",
                r.id, r.severity, r.probability, r.score, r.risk_level
            ));
        }

        out.push('\n');
        for chart in Report::render_all(table) {
            render_chart_summary(&mut out, &chart);
        }

        Ok(out)
    }
}

fn render_detail_text(out: &mut String, table: &RiskTable, id: &str) {
    let Chart::Detail(detail) = Report::render_detail(table, id) else {
        unreachable!("render_detail always yields a detail chart");
    };

    out.push_str(&detail.title);
    out.push('\n');
    if detail.bars.is_empty() {
        out.push_str("  (no such record)\n");
        return;
    }
    for bar in &detail.bars {
        out.push_str(&format!("  {:<12} {}\n", bar.metric, bar.label));
    }
}

fn render_chart_summary(out: &mut String, chart: &Chart) {
    match chart {
        Chart::Heatmap(h) => {
            out.push_str(&format!("{} ({} points)\n", h.title, h.points.len()));
            for p in &h.points {
                out.push_str(&format!(
                    "  [{}] severity={} probability={:.2} -> {}\n",
                    p.id, p.severity, p.probability, p.annotation
                ));
            }
        }
        Chart::Scatter(s) => {
            out.push_str(&format!(
                "Scatter: {} vs {} (x {:?}, y {:?})\n",
                s.x_title, s.y_title, s.x_bounds, s.y_bounds
            ));
        }
        Chart::StackedBar(b) => {
            out.push_str(&format!("Score by feature ({} bars)\n", b.bars.len()));
            for bar in &b.bars {
                out.push_str(&format!(
                    "  {:<3} {:<6.2} {}\n",
                    bar.id, bar.height, bar.risk_level
                ));
            }
        }
        Chart::Detail(d) => {
            out.push_str(&d.title);
            out.push('\n');
        }
    }
    out.push('\n');
}

struct JsonReporter;

/// Top-level JSON report document.
#[derive(Serialize)]
struct JsonReport<'a> {
    records: Vec<&'a crate::model::RiskRecord>,
    charts: Vec<Chart>,
}

impl Reporter for JsonReporter {
    fn generate(&self, table: &RiskTable, record: Option<&str>) -> Result<String> {
        let charts = match record {
            Some(id) => vec![Report::render_detail(table, id)],
            None => Report::render_all(table),
        };

        let report = JsonReport {
            records: table.records().collect(),
            charts,
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| RiskboardError::report("serializing JSON report", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_lists_all_records() {
        let table = RiskTable::builtin();
        let report = create_reporter(ReportFormat::Table)
            .generate(&table, None)
            .unwrap();
        for id in table.ids() {
            assert!(report.contains(id), "report missing record {id}");
        }
        assert!(report.contains("Heatmap for All Features"));
    }

    #[test]
    fn test_text_detail_report() {
        let table = RiskTable::builtin();
        let report = create_reporter(ReportFormat::Table)
            .generate(&table, Some("E"))
            .unwrap();
        assert!(report.contains("Feature E Risk Metrics"));
        assert!(report.contains("1.00"));
        assert!(report.contains("0.80"));
    }

    #[test]
    fn test_text_detail_report_unknown_id() {
        let table = RiskTable::builtin();
        let report = create_reporter(ReportFormat::Table)
            .generate(&table, Some("Z"))
            .unwrap();
        assert!(report.contains("no such record"));
    }

    #[test]
    fn test_json_report_structure() {
        let table = RiskTable::builtin();
        let report = create_reporter(ReportFormat::Json)
            .generate(&table, None)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 10);
        let kinds: Vec<_> = value["charts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["heatmap", "scatter", "stacked_bar"]);
    }
}
