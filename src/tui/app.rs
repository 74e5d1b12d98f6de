//! Application state for the dashboard TUI.

use crate::config::Preferences;
use crate::model::RiskTable;
use crate::report::{Chart, Report};

/// State for the dashboard.
pub struct DashboardApp {
    /// The fixed dataset being visualized.
    pub(crate) table: RiskTable,
    /// Index of the selected record in the sidebar, in table order.
    pub(crate) selected: usize,
    /// Overview charts trigger ("Generate All Visualizations").
    pub(crate) show_overview: bool,
    /// Detail chart trigger ("Show Individual Record Analysis").
    pub(crate) show_detail: bool,
    pub(crate) show_help: bool,
    pub(crate) show_legend: bool,
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl DashboardApp {
    #[must_use]
    pub fn new(table: RiskTable) -> Self {
        Self {
            table,
            selected: 0,
            // The overview is the landing state of the dashboard
            show_overview: true,
            show_detail: false,
            show_help: false,
            show_legend: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Restore session state from saved preferences.
    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        if let Some(last) = &prefs.last_record {
            if let Some(index) = self.table.ids().iter().position(|id| *id == last) {
                self.selected = index;
            }
        }
    }

    /// Currently selected record id.
    #[must_use]
    pub fn selected_id(&self) -> &str {
        self.table.ids()[self.selected.min(self.table.len().saturating_sub(1))]
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.table.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.table.len().saturating_sub(1);
    }

    /// Toggle the overview charts (heatmap, scatter, stacked bar).
    pub fn toggle_overview(&mut self) {
        self.show_overview = !self.show_overview;
    }

    /// Toggle the per-record detail chart.
    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Build the active charts in their fixed render order.
    ///
    /// Both triggers may be active at once; the overview charts always
    /// come first and the detail chart last.
    #[must_use]
    pub fn active_charts(&self) -> Vec<Chart> {
        let mut charts = Vec::new();
        if self.show_overview {
            charts.extend(Report::render_all(&self.table));
        }
        if self.show_detail {
            charts.push(Report::render_detail(&self.table, self.selected_id()));
        }
        charts
    }

    // Overlays are mutually exclusive: opening one closes the others.

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.show_legend = false;
        }
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        if self.show_legend {
            self.show_help = false;
        }
    }

    pub fn close_overlays(&mut self) {
        self.show_help = false;
        self.show_legend = false;
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.show_help || self.show_legend
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> DashboardApp {
        DashboardApp::new(RiskTable::builtin())
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected_id(), "A");

        app.select_last();
        assert_eq!(app.selected_id(), "J");
        app.select_next();
        assert_eq!(app.selected_id(), "J");

        app.select_first();
        app.select_next();
        assert_eq!(app.selected_id(), "B");
    }

    #[test]
    fn test_overview_charts_in_fixed_order() {
        let app = app();
        let names: Vec<_> = app.active_charts().iter().map(Chart::name).collect();
        assert_eq!(names, vec!["heatmap", "scatter", "stacked_bar"]);
    }

    #[test]
    fn test_both_triggers_render_four_charts() {
        let mut app = app();
        app.toggle_detail();
        let names: Vec<_> = app.active_charts().iter().map(Chart::name).collect();
        assert_eq!(names, vec!["heatmap", "scatter", "stacked_bar", "detail"]);
    }

    #[test]
    fn test_detail_only() {
        let mut app = app();
        app.toggle_overview();
        app.toggle_detail();
        let names: Vec<_> = app.active_charts().iter().map(Chart::name).collect();
        assert_eq!(names, vec!["detail"]);
    }

    #[test]
    fn test_no_triggers_no_charts() {
        let mut app = app();
        app.toggle_overview();
        assert!(app.active_charts().is_empty());
    }

    #[test]
    fn test_detail_follows_selection() {
        let mut app = app();
        app.toggle_overview();
        app.toggle_detail();
        app.select_next();
        let charts = app.active_charts();
        match &charts[0] {
            Chart::Detail(detail) => assert_eq!(detail.record_id, "B"),
            other => panic!("expected detail chart, got {}", other.name()),
        }
    }

    #[test]
    fn test_overlays_are_mutually_exclusive() {
        let mut app = app();
        app.toggle_help();
        app.toggle_legend();
        assert!(app.show_legend);
        assert!(!app.show_help);

        app.close_overlays();
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_apply_preferences_restores_selection() {
        let mut app = app();
        let prefs = Preferences {
            theme: "dark".to_string(),
            last_record: Some("H".to_string()),
        };
        app.apply_preferences(&prefs);
        assert_eq!(app.selected_id(), "H");

        // Unknown record: selection keeps its current position
        let prefs = Preferences {
            theme: "dark".to_string(),
            last_record: Some("Z".to_string()),
        };
        app.apply_preferences(&prefs);
        assert_eq!(app.selected_id(), "H");
    }
}
