// src/ui/ui_table.rs

use eframe::egui::{Align, Color32, Grid, Layout, RichText, ScrollArea, Ui};

use crate::models::SaleRecord;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_liters;

const TABLE_MAX_HEIGHT: f32 = 220.0;

/// Read-only record table, strictly in insertion order.
pub fn render_sales_table(ui: &mut Ui, records: &[SaleRecord]) {
    ui.label(
        RichText::new(UI_TEXT.table_heading)
            .color(UI_CONFIG.colors.subsection_heading)
            .strong(),
    );
    ui.add_space(4.0);

    if records.is_empty() {
        ui.label(
            RichText::new(UI_TEXT.table_empty)
                .italics()
                .color(Color32::GRAY),
        );
        return;
    }

    ScrollArea::vertical()
        .id_salt("sales_table_scroll")
        .max_height(TABLE_MAX_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            Grid::new("sales_table_grid")
                .striped(true)
                .num_columns(4)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new(UI_TEXT.table_header_date).strong());
                    ui.label(RichText::new(UI_TEXT.table_header_operator).strong());
                    ui.label(RichText::new(UI_TEXT.table_header_region).strong());
                    ui.label(RichText::new(UI_TEXT.table_header_liters).strong());
                    ui.end_row();

                    for record in records {
                        ui.label(record.date.format("%Y-%m-%d").to_string());
                        ui.label(&record.operator);
                        ui.label(&record.region);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format_liters(record.liters));
                        });
                        ui.end_row();
                    }
                });
        });
}
