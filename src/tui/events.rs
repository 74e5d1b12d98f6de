//! Event handling for the dashboard.

use super::app::DashboardApp;
use crate::config::Preferences;
use crate::tui::theme::toggle_theme;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Mouse(event::MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => {
                            if event_tx.send(Event::Mouse(mouse)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if event_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }
}

impl EventHandler {
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events for the dashboard.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    // Clear any status message on key press
    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Handle overlays first - toggle or close with Esc/q
    if app.has_overlay() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_overlays(),
            KeyCode::Char('?') if app.show_help => app.toggle_help(),
            KeyCode::Char('l') if app.show_legend => app.toggle_legend(),
            _ => {} // Ignore other keys when overlay is shown
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // The two report triggers. Both can be active at the same time,
        // in which case all four charts render in order.
        KeyCode::Char('a') => app.toggle_overview(),
        KeyCode::Char('d') | KeyCode::Enter => app.toggle_detail(),

        KeyCode::Char('T') => {
            let name = toggle_theme();
            let mut prefs = Preferences::load();
            prefs.theme = name.to_string();
            prefs.last_record = Some(app.selected_id().to_string());
            if prefs.save().is_err() {
                tracing::warn!("could not persist theme preference");
            }
            app.set_status_message(format!("Theme: {name}"));
        }

        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('l') => app.toggle_legend(),

        _ => {}
    }
}

/// Handle mouse events for the dashboard.
pub fn handle_mouse_event(app: &mut DashboardApp, mouse: event::MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_previous(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}
