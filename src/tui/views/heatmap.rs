//! Heatmap view: severity x probability grid colored by impact score.

use crate::report::{score_color_rgb, HeatmapSpec};
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Number of probability buckets on the y axis (0.1 steps).
const PROBABILITY_ROWS: usize = 10;
/// Severity columns on the x axis (1..=5).
const SEVERITY_COLS: u8 = 5;

/// Render the heatmap as a grid of colored, annotated cells.
///
/// Probability is bucketed into 0.1 steps with the highest bucket on top;
/// records sharing a cell render their annotations side by side.
pub fn render_heatmap(frame: &mut Frame, area: Rect, spec: &HeatmapSpec) {
    let scheme = colors();

    // Reserve the last line for the color scale legend
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let mut header_cells = vec![Cell::from("").style(Style::default().fg(scheme.primary))];
    for severity in 1..=SEVERITY_COLS {
        header_cells.push(
            Cell::from(format!("{severity}"))
                .style(Style::default().fg(scheme.primary).bold()),
        );
    }
    let header = Row::new(header_cells);

    let rows: Vec<Row> = (0..PROBABILITY_ROWS)
        .map(|row_index| {
            // Top row is the 1.0 bucket, bottom row the 0.1 bucket
            let bucket = PROBABILITY_ROWS - row_index;
            let row_label = format!("{:.1}", bucket as f64 / 10.0);

            let mut cells =
                vec![Cell::from(row_label).style(Style::default().fg(scheme.text_muted))];

            for severity in 1..=SEVERITY_COLS {
                let in_cell: Vec<_> = spec
                    .points
                    .iter()
                    .filter(|p| {
                        p.severity == severity && probability_bucket(p.probability) == bucket
                    })
                    .collect();

                if in_cell.is_empty() {
                    cells.push(Cell::from("·").style(Style::default().fg(scheme.muted)));
                } else {
                    let text = in_cell
                        .iter()
                        .map(|p| p.annotation.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    // With several records in one cell, the hottest wins
                    let hottest = in_cell
                        .iter()
                        .map(|p| p.normalized)
                        .fold(0.0_f64, f64::max);
                    cells.push(
                        Cell::from(text)
                            .style(Style::default().fg(score_color_rgb(hottest)).bold()),
                    );
                }
            }

            Row::new(cells)
        })
        .collect();

    let mut constraints = vec![Constraint::Length(4)];
    constraints.extend(std::iter::repeat(Constraint::Min(8)).take(SEVERITY_COLS as usize));

    let title = format!(" {} ({} / {}) ", spec.title, spec.y_title, spec.x_title);
    let table = Table::new(rows, constraints).header(header).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(scheme.primary).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    );

    frame.render_widget(table, chunks[0]);
    render_colorbar(frame, chunks[1], &spec.colorbar_title);
}

/// One-line rendition of the continuous colorbar.
fn render_colorbar(frame: &mut Frame, area: Rect, title: &str) {
    const STEPS: usize = 16;

    let mut spans = vec![Span::styled(
        format!(" {title}: low "),
        Style::default().fg(colors().text_muted),
    )];
    for step in 0..=STEPS {
        let t = step as f64 / STEPS as f64;
        spans.push(Span::styled("█", Style::default().fg(score_color_rgb(t))));
    }
    spans.push(Span::styled(
        " high",
        Style::default().fg(colors().text_muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Map a probability to its 0.1-wide bucket (1..=10).
fn probability_bucket(probability: f64) -> usize {
    ((probability * 10.0).round() as usize).clamp(1, PROBABILITY_ROWS)
}
