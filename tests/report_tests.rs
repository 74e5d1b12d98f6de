//! Integration tests for the chart specification layer.
//!
//! These exercise the observable chart semantics end to end, against the
//! built-in dataset, without touching the terminal UI.

use riskboard::model::{RiskLevel, RiskTable};
use riskboard::report::{
    create_reporter, Chart, Report, ReportFormat, SCATTER_X_BOUNDS, SCATTER_Y_BOUNDS,
};

fn heatmap(charts: &[Chart]) -> &riskboard::report::HeatmapSpec {
    match &charts[0] {
        Chart::Heatmap(spec) => spec,
        other => panic!("expected heatmap first, got {}", other.name()),
    }
}

#[test]
fn test_render_all_order_is_fixed() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let names: Vec<_> = charts.iter().map(Chart::name).collect();
    assert_eq!(names, vec!["heatmap", "scatter", "stacked_bar"]);
}

#[test]
fn test_heatmap_has_one_annotated_point_per_record() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let heatmap = heatmap(&charts);

    assert_eq!(heatmap.points.len(), 10);
    for point in &heatmap.points {
        assert!(
            point.annotation.starts_with(&point.id),
            "annotation '{}' should start with the record id",
            point.annotation
        );
        assert!(
            point.annotation.contains(&format!("{:.2}", point.score)),
            "annotation '{}' should carry the score to two decimals",
            point.annotation
        );
    }
}

#[test]
fn test_heatmap_color_tracks_normalized_score() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let heatmap = heatmap(&charts);

    // A has the maximum score: full red. G has the minimum: near green.
    let a = heatmap.points.iter().find(|p| p.id == "A").unwrap();
    assert_eq!(a.color, (255, 0, 0));
    let g = heatmap.points.iter().find(|p| p.id == "G").unwrap();
    assert!(g.color.1 > g.color.0, "lowest score should lean green: {:?}", g.color);
}

#[test]
fn test_scatter_bounds_are_fixed() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let Chart::Scatter(scatter) = &charts[1] else {
        panic!("expected scatter second");
    };

    assert_eq!(scatter.x_bounds, SCATTER_X_BOUNDS);
    assert_eq!(scatter.y_bounds, SCATTER_Y_BOUNDS);
    assert_eq!(scatter.x_bounds, [0.0, 6.0]);
    assert_eq!(scatter.y_bounds, [0.0, 1.0]);
    assert_eq!(scatter.points.len(), 10);
}

#[test]
fn test_scatter_size_is_the_score() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let Chart::Scatter(scatter) = &charts[1] else {
        panic!("expected scatter second");
    };

    for point in &scatter.points {
        let record = table.get(&point.id).expect("scatter point for known record");
        assert!((point.size - record.score).abs() < f64::EPSILON);
        assert!((point.x - f64::from(record.severity)).abs() < f64::EPSILON);
        assert!((point.y - record.probability).abs() < f64::EPSILON);
    }
}

#[test]
fn test_stacked_bar_heights_equal_scores() {
    let table = RiskTable::builtin();
    let charts = Report::render_all(&table);
    let Chart::StackedBar(stacked) = &charts[2] else {
        panic!("expected stacked bar third");
    };

    assert_eq!(stacked.bars.len(), 10);
    for bar in &stacked.bars {
        let record = table.get(&bar.id).expect("bar for known record");
        assert!(
            (bar.height - record.score).abs() < f64::EPSILON,
            "bar {} height {} != score {}",
            bar.id,
            bar.height,
            record.score
        );
        assert_eq!(bar.risk_level, record.risk_level);
    }
}

#[test]
fn test_detail_has_exactly_three_two_decimal_bars() {
    let table = RiskTable::builtin();
    let Chart::Detail(detail) = Report::render_detail(&table, "A") else {
        panic!("expected detail chart");
    };

    assert_eq!(detail.bars.len(), 3);
    let metrics: Vec<_> = detail.bars.iter().map(|b| b.metric).collect();
    assert_eq!(metrics, vec!["Severity", "Probability", "Score"]);
    for bar in &detail.bars {
        assert_eq!(
            bar.label,
            format!("{:.2}", bar.value),
            "label should be the value at two decimals"
        );
    }
}

#[test]
fn test_detail_record_e_values() {
    let table = RiskTable::builtin();
    let Chart::Detail(detail) = Report::render_detail(&table, "E") else {
        panic!("expected detail chart");
    };

    let labels: Vec<_> = detail.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["1.00", "0.80", "0.80"]);
}

#[test]
fn test_detail_unknown_id_yields_zero_bars() {
    let table = RiskTable::builtin();
    let Chart::Detail(detail) = Report::render_detail(&table, "Z") else {
        panic!("expected detail chart");
    };

    assert!(detail.bars.is_empty(), "unknown id must not produce bars");
    assert_eq!(detail.record_id, "Z");
}

#[test]
fn test_builtin_dataset_shape() {
    let table = RiskTable::builtin();
    assert_eq!(table.len(), 10);
    assert!((table.max_score() - 4.5).abs() < f64::EPSILON);

    let high = table
        .records()
        .filter(|r| r.risk_level == RiskLevel::High)
        .count();
    assert_eq!(high, 3, "A, F, H are high risk");
}

#[test]
fn test_json_report_embeds_all_charts() {
    let table = RiskTable::builtin();
    let reporter = create_reporter(ReportFormat::Json);
    let output = reporter
        .generate(&table, None)
        .expect("json report generation");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

    let kinds: Vec<_> = value["charts"]
        .as_array()
        .expect("charts array")
        .iter()
        .map(|c| c["kind"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(kinds, vec!["heatmap", "scatter", "stacked_bar"]);
    assert_eq!(value["records"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_table_report_lists_every_record() {
    let table = RiskTable::builtin();
    let reporter = create_reporter(ReportFormat::Table);
    let output = reporter
        .generate(&table, None)
        .expect("table report generation");

    for id in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
        assert!(output.contains(id), "report should mention record {id}");
    }
}
