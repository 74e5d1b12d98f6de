//! Stacked bar view: one bar per record, colored by risk level.

use crate::report::StackedBarSpec;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

/// Bar values are fractional scores; scale into integers for the widget.
pub(crate) const BAR_SCALE: f64 = 100.0;

/// Render the per-feature score chart.
pub fn render_stacked_bar(frame: &mut Frame, area: Rect, spec: &StackedBarSpec) {
    let scheme = colors();

    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value((bar.height * BAR_SCALE).round() as u64)
                .text_value(format!("{:.1}", bar.height))
                .label(Line::from(bar.id.clone()))
                .style(Style::default().fg(scheme.risk_color(bar.risk_level)))
        })
        .collect();

    let max = spec
        .bars
        .iter()
        .map(|b| b.height)
        .fold(0.0_f64, f64::max);

    // Legend in the block title: one swatch per level present
    let mut title_spans = vec![Span::styled(
        " Score by Feature ",
        Style::default().fg(scheme.primary).bold(),
    )];
    for level in &spec.legend {
        title_spans.push(Span::styled(
            "■ ",
            Style::default().fg(scheme.risk_color(*level)),
        ));
        title_spans.push(Span::styled(
            format!("{} ", level.label()),
            Style::default().fg(scheme.text_muted),
        ));
    }

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Line::from(title_spans))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .bar_width(5)
        .bar_gap(1)
        .max((max * BAR_SCALE).round() as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
