//! Scatter view: severity vs probability with score-sized markers.

use crate::report::{id_color, ScatterSpec};
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Render the scatter plot with one dataset per record, so every record
/// keeps its own color and marker size class. Axis bounds come from the
/// spec and never depend on the data.
pub fn render_scatter(frame: &mut Frame, area: Rect, spec: &ScatterSpec) {
    let scheme = colors();

    // Dataset::data borrows, so the coordinate slices must outlive the chart
    let coords: Vec<[(f64, f64); 1]> = spec.points.iter().map(|p| [(p.x, p.y)]).collect();
    let names: Vec<String> = spec
        .points
        .iter()
        .map(|p| format!("{} ({:.1})", p.id, p.size))
        .collect();

    let datasets: Vec<Dataset> = spec
        .points
        .iter()
        .zip(coords.iter())
        .zip(names.iter())
        .map(|((point, data), name)| {
            Dataset::default()
                .name(name.clone())
                .marker(marker_for_score(point.size))
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(id_color(point.color_index)))
                .data(data)
        })
        .collect();

    let x_axis = Axis::default()
        .title(spec.x_title.clone())
        .style(Style::default().fg(scheme.text_muted))
        .bounds(spec.x_bounds)
        .labels(["0", "2", "4", "6"]);

    let y_axis = Axis::default()
        .title(spec.y_title.clone())
        .style(Style::default().fg(scheme.text_muted))
        .bounds(spec.y_bounds)
        .labels(["0.0", "0.5", "1.0"]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Severity vs Probability ")
                .title_style(Style::default().fg(scheme.primary).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Terminal cells cannot scale glyphs, so score maps to a marker class.
fn marker_for_score(score: f64) -> Marker {
    if score < 1.0 {
        Marker::Dot
    } else if score < 2.5 {
        Marker::HalfBlock
    } else {
        Marker::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_classes_grow_with_score() {
        assert_eq!(marker_for_score(0.3), Marker::Dot);
        assert_eq!(marker_for_score(1.5), Marker::HalfBlock);
        assert_eq!(marker_for_score(4.5), Marker::Block);
    }
}
