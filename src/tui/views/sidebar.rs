//! Sidebar: record selection and report triggers.

use crate::tui::app::DashboardApp;
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the options panel: the record list plus the two triggers.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    render_record_list(frame, chunks[0], app);
    render_triggers(frame, chunks[1], app);
}

fn render_record_list(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();

    let items: Vec<ListItem> = app
        .table
        .records()
        .enumerate()
        .map(|(index, record)| {
            let is_selected = index == app.selected;
            let marker = if is_selected { "▶ " } else { "  " };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(scheme.accent)),
                Span::styled(
                    format!("{:<3}", record.id),
                    if is_selected {
                        Styles::selected()
                    } else {
                        Styles::text()
                    },
                ),
                Span::styled(
                    format!(" {:<6}", record.risk_level.label()),
                    Style::default().fg(scheme.risk_color(record.risk_level)),
                ),
                Span::styled(
                    format!(" {:.2}", record.score),
                    Style::default().fg(scheme.text_muted),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Options ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );

    frame.render_widget(list, area);
}

fn render_triggers(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();

    let check = |on: bool| if on { "[x]" } else { "[ ]" };

    let lines = vec![
        Line::from(vec![
            Span::styled("[a] ", Styles::shortcut_key()),
            Span::styled(
                check(app.show_overview),
                Style::default().fg(if app.show_overview {
                    scheme.success
                } else {
                    scheme.text_muted
                }),
            ),
            Span::styled(" Generate All Visualizations", Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("[d] ", Styles::shortcut_key()),
            Span::styled(
                check(app.show_detail),
                Style::default().fg(if app.show_detail {
                    scheme.success
                } else {
                    scheme.text_muted
                }),
            ),
            Span::styled(" Show Individual Record Analysis", Styles::text()),
        ]),
    ];

    let triggers = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );

    frame.render_widget(triggers, area);
}
