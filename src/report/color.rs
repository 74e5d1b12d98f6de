//! Color mapping for chart rendering.

use ratatui::style::Color;

/// Three-stop color scale endpoints: green at 0.0, yellow at 0.5, red at 1.0.
const GREEN: (u8, u8, u8) = (0, 128, 0);
const YELLOW: (u8, u8, u8) = (255, 255, 0);
const RED: (u8, u8, u8) = (255, 0, 0);

/// Map a normalized score in 0.0..=1.0 onto the heatmap color scale.
///
/// Interpolates linearly in RGB between the green/yellow/red stops.
/// Out-of-range inputs are clamped.
#[must_use]
pub fn score_color(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    if t <= 0.5 {
        lerp_rgb(GREEN, YELLOW, t * 2.0)
    } else {
        lerp_rgb(YELLOW, RED, (t - 0.5) * 2.0)
    }
}

/// [`score_color`] as a ratatui color.
#[must_use]
pub fn score_color_rgb(t: f64) -> Color {
    let (r, g, b) = score_color(t);
    Color::Rgb(r, g, b)
}

fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    (
        lerp_channel(from.0, to.0, t),
        lerp_channel(from.1, to.1, t),
        lerp_channel(from.2, to.2, t),
    )
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Categorical palette for per-record coloring, stable by table position.
#[must_use]
pub fn id_color(index: usize) -> Color {
    const PALETTE: [Color; 10] = [
        Color::Cyan,
        Color::Yellow,
        Color::Green,
        Color::Magenta,
        Color::Blue,
        Color::LightRed,
        Color::LightCyan,
        Color::LightYellow,
        Color::LightGreen,
        Color::LightMagenta,
    ];
    PALETTE[index % PALETTE.len()]
}
