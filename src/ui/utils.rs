use eframe::egui::{Context, Visuals};

use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}

/// "12,345 Lts" - whole liters with thousands separators, like the report
/// this replaces.
pub fn format_liters(value: f64) -> String {
    format!("{}{}", group_thousands(value.round() as i64), UI_TEXT.liters_suffix)
}

/// "41.3%" for Some(0.4133...), a dash when the ratio is undefined.
pub fn format_pct(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => UI_TEXT.metric_undefined.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(30_000), "30,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-4200), "-4,200");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_pct(Some(0.0333)), "3.3%");
        assert_eq!(format_pct(Some(1.25)), "125.0%");
        assert_eq!(format_pct(None), "—");
    }
}
