use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub metric_value: Color32,
    pub success: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 210, 80),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(24, 26, 30),
        side_panel: Color32::from_rgb(32, 34, 40),
        metric_value: Color32::WHITE,
        success: Color32::from_rgb(100, 220, 120),
        warning: Color32::from_rgb(255, 140, 80),
    },
};

impl UiConfig {
    /// Frame for the left sidebar (standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Frame for the dashboard area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(14, 8),
            ..Default::default()
        }
    }

    /// Frame for a single metric card
    pub fn metric_frame(&self) -> Frame {
        Frame {
            fill: Color32::from_black_alpha(40),
            stroke: Stroke::new(1.0, Color32::from_gray(60)),
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}
