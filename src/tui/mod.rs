//! Interactive terminal dashboard.
//!
//! Built on `ratatui` with the `crossterm` backend: alternate screen,
//! raw mode, mouse capture and a background event thread with a 100 ms
//! tick. The charts themselves come from [`crate::report`]; this module
//! only renders them.

mod app;
mod events;
pub mod theme;
mod ui;
pub mod views;
pub mod widgets;

pub use app::DashboardApp;
pub use events::{Event, EventHandler};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, Theme};
pub use ui::run_dashboard;
