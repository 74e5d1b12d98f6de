//! UI rendering and terminal lifecycle for the dashboard.

use super::app::DashboardApp;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::views;
use crate::config::Preferences;
use crate::error::{ErrorContext, Result};
use crate::model::RiskRecord;
use crate::tui::theme::{
    colors, current_theme_name, mode_badge, render_footer_hints, risk_badge, set_theme,
    FooterHints, Styles, Theme,
};
use crate::tui::widgets::{
    self, check_terminal_size, render_size_warning, truncate_str, MIN_HEIGHT, MIN_WIDTH,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::stdout;

/// Run the dashboard TUI.
///
/// `theme_override` wins over the persisted theme preference when set.
pub fn run_dashboard(app: &mut DashboardApp, theme_override: Option<&str>) -> Result<()> {
    // Load theme and session preferences
    let prefs = Preferences::load();
    match theme_override {
        Some(name) => set_theme(Theme::from_name(name)),
        None => set_theme(Theme::from_name(&prefs.theme)),
    }
    app.apply_preferences(&prefs);

    tracing::debug!("entering dashboard");

    // Setup terminal
    enable_raw_mode().terminal_context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .terminal_context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).terminal_context("creating terminal")?;

    // Event handler
    let events = EventHandler::default();

    // Main loop
    loop {
        terminal
            .draw(|frame| render(frame, app))
            .terminal_context("drawing frame")?;

        match events.next().terminal_context("reading terminal events")? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode().terminal_context("disabling raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .terminal_context("leaving alternate screen")?;
    terminal.show_cursor().terminal_context("restoring cursor")?;

    // Persist session state
    let mut prefs = Preferences::load();
    prefs.theme = current_theme_name().to_string();
    prefs.last_record = Some(app.selected_id().to_string());
    if prefs.save().is_err() {
        tracing::warn!("could not persist preferences");
    }

    tracing::debug!("left dashboard");
    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut DashboardApp) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    // Sidebar + chart area
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(40)])
        .split(chunks[1]);

    views::render_sidebar(frame, content[0], app);
    views::render_charts(frame, content[1], app);

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    // Render overlays
    if app.show_help {
        render_help_overlay(frame, area);
    }

    if app.show_legend {
        render_legend_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header_line = Line::from(vec![
        Span::styled("riskboard", Styles::header_title()),
        Span::styled(" ", Style::default()),
        mode_badge("dashboard"),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            "Risk Assessment Dashboard",
            Style::default().fg(colors().text).bold(),
        ),
    ]);

    let header = Paragraph::new(header_line);
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = vec![
        Span::styled(" Records: ", Styles::text_muted()),
        Span::styled(
            app.table.len().to_string(),
            Style::default().fg(colors().primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled("Selected: ", Styles::text_muted()),
    ];

    if let Some(record) = app.table.get(app.selected_id()) {
        spans.push(Span::styled(
            record.id.clone(),
            Style::default().fg(colors().accent).bold(),
        ));
        spans.push(Span::raw(" "));
        spans.push(risk_badge(record.risk_level));

        let used: usize = spans.iter().map(Span::width).sum();
        let remaining = usize::from(area.width).saturating_sub(used);
        spans.push(Span::styled(
            status_summary(record, remaining),
            Styles::text_muted(),
        ));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors().background_alt));

    frame.render_widget(status, area);
}

/// Selected-record summary for the status bar, truncated to the space the
/// leading spans leave over.
fn status_summary(record: &RiskRecord, max_width: usize) -> String {
    truncate_str(
        &format!(
            " severity {} · probability {:.2} · score {:.2}",
            record.severity, record.probability, record.score
        ),
        max_width,
    )
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    // Show status message if set, otherwise show key hints
    if let Some(ref msg) = app.status_message {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.as_str(), Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = FooterHints::dashboard();
    let footer_spans = render_footer_hints(&hints);

    let footer = Paragraph::new(Line::from(footer_spans))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());

    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(60, 65, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Dashboard Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k     ", Style::default().fg(colors().accent)),
            Span::styled("Select record", Style::default().fg(colors().text)),
        ]),
        Line::from(vec![
            Span::styled("  Home/End       ", Style::default().fg(colors().accent)),
            Span::styled("First / last record", Style::default().fg(colors().text)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Visualizations",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  a              ", Style::default().fg(colors().accent)),
            Span::styled(
                "Generate all visualizations (heatmap, scatter, bars)",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  d / Enter      ", Style::default().fg(colors().accent)),
            Span::styled(
                "Show individual record analysis",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("                 ", Style::default()),
            Span::styled(
                "Both can be active at once; charts keep a fixed order",
                Style::default().fg(colors().text_muted),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Other",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  l              ", Style::default().fg(colors().accent)),
            Span::styled("Show color legend", Style::default().fg(colors().text)),
        ]),
        Line::from(vec![
            Span::styled("  T              ", Style::default().fg(colors().accent)),
            Span::styled("Toggle theme (dark/light)", Style::default().fg(colors().text)),
        ]),
        Line::from(vec![
            Span::styled("  ?              ", Style::default().fg(colors().accent)),
            Span::styled("Toggle this help", Style::default().fg(colors().text)),
        ]),
        Line::from(vec![
            Span::styled("  q / Esc        ", Style::default().fg(colors().accent)),
            Span::styled("Quit / Close overlay", Style::default().fg(colors().text)),
        ]),
        Line::from(""),
        Line::styled(
            "Press q or Esc to close",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(colors().accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().accent)),
        )
        .style(Style::default().fg(colors().text));

    frame.render_widget(help, popup_area);
}

fn render_legend_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(50, 50, area);
    frame.render_widget(Clear, popup_area);

    let legend_text = vec![
        Line::styled(
            "━━━ Color Legend ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Risk Levels",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(colors().low)),
            Span::styled("Low    ", Style::default().fg(colors().text)),
            Span::styled("minor exposure", Style::default().fg(colors().text_muted)),
        ]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(colors().medium)),
            Span::styled("Medium ", Style::default().fg(colors().text)),
            Span::styled("moderate exposure", Style::default().fg(colors().text_muted)),
        ]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(colors().high)),
            Span::styled("High   ", Style::default().fg(colors().text)),
            Span::styled("serious exposure", Style::default().fg(colors().text_muted)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Heatmap Scale",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  Impact Score: ", Style::default().fg(colors().text)),
            Span::styled(
                "green (low) → yellow (mid) → red (high)",
                Style::default().fg(colors().text_muted),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Scatter Markers",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  · ▄ █ ", Style::default().fg(colors().text)),
            Span::styled(
                "marker grows with impact score",
                Style::default().fg(colors().text_muted),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Press q or Esc to close",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let legend = Paragraph::new(legend_text).block(
        Block::default()
            .title(" Legend ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );

    frame.render_widget(legend, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskTable;
    use ratatui::backend::TestBackend;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_status_summary_truncates_on_narrow_width() {
        let table = RiskTable::builtin();
        let record = table.get("A").expect("record A exists");

        let full = status_summary(record, 200);
        assert!(full.contains("probability 0.90"));
        assert!(full.contains("score 4.50"));

        let narrow = status_summary(record, 20);
        assert!(UnicodeWidthStr::width(narrow.as_str()) <= 20);
        assert!(narrow.ends_with("..."));
    }

    #[test]
    fn test_legend_describes_levels_without_score_cutoffs() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_legend_overlay(frame, frame.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        for label in ["Low", "Medium", "High"] {
            assert!(content.contains(label), "legend missing level {label}");
        }
        // Levels are authored per record, not derived from score thresholds
        assert!(!content.contains("score under"));
        assert!(!content.contains("2.5 and up"));
    }
}
