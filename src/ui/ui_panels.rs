// src/ui/ui_panels.rs
//
// Left sidebar: target configuration controls and the new-sale entry form.

use chrono::{Local, NaiveDate};
use eframe::egui::{Button, DragValue, Grid, RichText, TextEdit, Ui};
use egui_extras::DatePickerButton;

use crate::config::{MAX_BUSINESS_DAYS, MIN_BUSINESS_DAYS, TargetConfig};
use crate::models::SaleRecord;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .color(UI_CONFIG.colors.subsection_heading)
            .strong(),
    );
    ui.add_space(6.0);
}

/// Target configuration controls. The drag ranges enforce the documented
/// bounds (target >= 0, business days in [1, 31]).
pub fn render_config_panel(ui: &mut Ui, config: &mut TargetConfig) {
    section_heading(ui, UI_TEXT.config_heading);

    Grid::new("config_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label(UI_TEXT.monthly_target_label);
            ui.add(
                DragValue::new(&mut config.monthly_target)
                    .speed(1000.0)
                    .range(0.0..=10_000_000.0)
                    .max_decimals(0)
                    .suffix(UI_TEXT.liters_suffix),
            );
            ui.end_row();

            ui.label(UI_TEXT.business_days_label);
            ui.add(
                DragValue::new(&mut config.business_days)
                    .range(MIN_BUSINESS_DAYS..=MAX_BUSINESS_DAYS),
            );
            ui.end_row();
        });
}

/// Transient state of the entry form. Cleared back to defaults after every
/// successful submission (the date resets to today).
pub struct SaleForm {
    pub date: NaiveDate,
    pub operator: String,
    pub region: String,
    pub liters: f64,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            operator: String::new(),
            region: String::new(),
            liters: 0.0,
        }
    }
}

impl SaleForm {
    /// Draws the form; returns the record to append when the user hits
    /// "Guardar". Any well-typed input is accepted, including zero liters.
    pub fn render(&mut self, ui: &mut Ui) -> Option<SaleRecord> {
        section_heading(ui, UI_TEXT.form_heading);

        Grid::new("sale_form_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.form_date);
                ui.add(DatePickerButton::new(&mut self.date).id_salt("sale_date"));
                ui.end_row();

                ui.label(UI_TEXT.form_operator);
                ui.add(TextEdit::singleline(&mut self.operator).desired_width(140.0));
                ui.end_row();

                ui.label(UI_TEXT.form_region);
                ui.add(TextEdit::singleline(&mut self.region).desired_width(140.0));
                ui.end_row();

                ui.label(UI_TEXT.form_liters);
                ui.add(
                    DragValue::new(&mut self.liters)
                        .speed(10.0)
                        .range(0.0..=1_000_000.0)
                        .max_decimals(0)
                        .suffix(UI_TEXT.liters_suffix),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        let submitted = ui
            .add_sized([ui.available_width(), 28.0], Button::new(UI_TEXT.form_submit))
            .clicked();

        if submitted {
            let record = SaleRecord {
                date: self.date,
                operator: std::mem::take(&mut self.operator),
                region: std::mem::take(&mut self.region),
                liters: self.liters,
            };
            *self = Self::default();
            Some(record)
        } else {
            None
        }
    }
}
