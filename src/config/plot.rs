//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Daily volume bars.
    pub daily_bar_color: Color32,
    /// Realized cumulative line.
    pub cumulative_line_color: Color32,
    /// Idealized cumulative-target line (dashed).
    pub target_line_color: Color32,

    pub line_width: f32,
    pub target_dash_length: f32,
    pub point_radius: f32,
    /// Bar width relative to one day slot (0.0 to 1.0).
    pub bar_width_pct: f64,

    pub chart_height: f32,
    /// Headroom above the tallest series (e.g. 0.05 = 5%).
    pub plot_y_padding_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    daily_bar_color: Color32::from_rgb(31, 119, 180), // The classic report blue
    cumulative_line_color: Color32::from_rgb(0, 160, 70),
    target_line_color: Color32::from_rgb(215, 50, 50),

    line_width: 2.0,
    target_dash_length: 8.0,
    point_radius: 3.0,
    bar_width_pct: 0.7, // 70% width leaves a gap between day slots

    chart_height: 260.0,
    plot_y_padding_pct: 0.05,
};
