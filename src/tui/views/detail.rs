//! Detail view: three-bar breakdown of a single record.

use super::stacked::BAR_SCALE;
use crate::report::DetailSpec;
use crate::tui::theme::colors;
use crate::tui::widgets::render_empty_state;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

/// Render the per-record metric chart. An unknown record yields an empty
/// spec, which renders as a placeholder rather than an error.
pub fn render_detail(frame: &mut Frame, area: Rect, spec: &DetailSpec) {
    let scheme = colors();

    if spec.bars.is_empty() {
        render_empty_state(
            frame,
            area,
            &format!("No record with id '{}'", spec.record_id),
            Some("Select a record in the sidebar"),
        );
        return;
    }

    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value((bar.value * BAR_SCALE).round() as u64)
                .text_value(bar.label.clone())
                .label(Line::from(bar.metric))
                .style(Style::default().fg(scheme.primary))
        })
        .collect();

    let max = spec.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", spec.title))
                .title_style(Style::default().fg(scheme.primary).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        )
        .bar_width(11)
        .bar_gap(2)
        .max((max * BAR_SCALE).round() as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
