// src/ui/ui_metrics.rs

use eframe::egui::{Color32, RichText, Ui};

use crate::models::DashboardModel;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_liters, format_pct};

fn metric_card(ui: &mut Ui, label: &str, value: &str, color: Color32) {
    UI_CONFIG.metric_frame().show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().color(Color32::GRAY));
            ui.label(RichText::new(value).size(18.0).strong().color(color));
        });
    });
}

/// The six scalar metric widgets, two rows of three.
pub fn render_metrics(ui: &mut Ui, model: &DashboardModel) {
    let neutral = UI_CONFIG.colors.metric_value;
    // Shortfall in orange once we are behind, green when ahead of target.
    let need_color = if model.daily_need > model.daily_target {
        UI_CONFIG.colors.warning
    } else {
        UI_CONFIG.colors.success
    };

    ui.columns(3, |cols| {
        metric_card(
            &mut cols[0],
            UI_TEXT.metric_monthly_target,
            &format_liters(model.monthly_target),
            neutral,
        );
        metric_card(
            &mut cols[1],
            UI_TEXT.metric_total_sold,
            &format_liters(model.total_sold),
            neutral,
        );
        metric_card(
            &mut cols[2],
            UI_TEXT.metric_completion,
            &format_pct(model.completion_ratio),
            neutral,
        );
    });

    ui.add_space(6.0);

    ui.columns(3, |cols| {
        metric_card(
            &mut cols[0],
            UI_TEXT.metric_daily_target,
            &format_liters(model.daily_target),
            neutral,
        );
        metric_card(
            &mut cols[1],
            UI_TEXT.metric_daily_need,
            &format_liters(model.daily_need),
            need_color,
        );
        metric_card(
            &mut cols[2],
            UI_TEXT.metric_remaining_days,
            &model.remaining_days.to_string(),
            neutral,
        );
    });
}
