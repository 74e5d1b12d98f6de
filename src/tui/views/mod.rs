//! Dashboard views: the sidebar and the four chart renderers.

mod detail;
mod heatmap;
mod scatter;
mod sidebar;
mod stacked;

pub use detail::render_detail;
pub use heatmap::render_heatmap;
pub use scatter::render_scatter;
pub use sidebar::render_sidebar;
pub use stacked::render_stacked_bar;

use crate::report::Chart;
use crate::tui::app::DashboardApp;
use crate::tui::widgets::render_empty_state;
use ratatui::prelude::*;

/// Render the active charts into the content area.
///
/// One chart takes the whole area, two stack vertically, three or four
/// use a two-column grid. Reading order (left to right, top to bottom)
/// preserves the fixed chart order.
pub fn render_charts(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let charts = app.active_charts();

    if charts.is_empty() {
        render_empty_state(
            frame,
            area,
            "No visualizations active",
            Some("Press [a] for the overview or [d] for record analysis"),
        );
        return;
    }

    let areas = chart_areas(area, charts.len());
    for (chart, slot) in charts.iter().zip(areas) {
        match chart {
            Chart::Heatmap(spec) => render_heatmap(frame, slot, spec),
            Chart::Scatter(spec) => render_scatter(frame, slot, spec),
            Chart::StackedBar(spec) => render_stacked_bar(frame, slot, spec),
            Chart::Detail(spec) => render_detail(frame, slot, spec),
        }
    }
}

fn chart_areas(area: Rect, count: usize) -> Vec<Rect> {
    match count {
        0 => Vec::new(),
        1 => vec![area],
        2 => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
            .to_vec(),
        _ => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);

            let top = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            if count == 3 {
                // Third chart gets the full bottom row
                vec![top[0], top[1], rows[1]]
            } else {
                let bottom = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[1]);
                vec![top[0], top[1], bottom[0], bottom[1]]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_areas_cover_counts() {
        let area = Rect::new(0, 0, 100, 40);
        for count in 0..=4 {
            assert_eq!(chart_areas(area, count).len(), count);
        }
    }

    #[test]
    fn test_single_chart_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(chart_areas(area, 1), vec![area]);
    }
}
