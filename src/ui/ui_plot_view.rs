// src/ui/ui_plot_view.rs
//
// The two dashboard charts, both driven purely by the DashboardModel series:
// daily-volume bars, and the cumulative line against the idealized
// cumulative-target ramp. X positions are recorded-day indices (one slot per
// distinct date, skipped calendar days do not appear); the custom axis maps
// them back to dates.

use chrono::NaiveDate;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{
    Axis, AxisHints, Bar, BarChart, GridInput, GridMark, Legend, Line, LineStyle, Plot,
    PlotPoints, Points,
};
use serde::{Deserialize, Serialize};

use crate::config::plot::PLOT_CONFIG;
use crate::models::DashboardModel;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Which chart layers are drawn. Persisted across runs as a UI preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChartVisibility {
    pub daily_bars: bool,
    pub cumulative: bool,
    pub target_ramp: bool,
}

impl Default for ChartVisibility {
    fn default() -> Self {
        Self {
            daily_bars: true,
            cumulative: true,
            target_ramp: true,
        }
    }
}

// Labels day indices with their dates; fractional grid positions stay blank.
fn date_axis(dates: Vec<NaiveDate>) -> AxisHints<'static> {
    AxisHints::new(Axis::X).formatter(move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 0.05 || idx < 0.0 {
            return String::new();
        }
        dates
            .get(idx as usize)
            .map(|d| d.format("%d/%m").to_string())
            .unwrap_or_default()
    })
}

// One grid mark per recorded day, nothing in between.
fn day_grid_spacer(day_count: usize) -> impl Fn(GridInput) -> Vec<GridMark> {
    move |input| {
        let (min, max) = input.bounds;
        let start = min.ceil().max(0.0) as i64;
        let end = max.floor().min(day_count.saturating_sub(1) as f64) as i64;
        (start..=end)
            .map(|i| GridMark {
                value: i as f64,
                step_size: 1.0,
            })
            .collect()
    }
}

fn chart_title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::LIGHT_GRAY).strong());
}

pub fn render_charts(ui: &mut Ui, model: &DashboardModel, visibility: &mut ChartVisibility) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(UI_TEXT.charts_heading)
                .color(UI_CONFIG.colors.subsection_heading)
                .strong(),
        );
        ui.add_space(16.0);
        ui.checkbox(&mut visibility.daily_bars, UI_TEXT.toggle_daily_bars);
        ui.checkbox(&mut visibility.cumulative, UI_TEXT.toggle_cumulative);
        ui.checkbox(&mut visibility.target_ramp, UI_TEXT.toggle_target_ramp);
    });
    ui.add_space(6.0);

    if visibility.daily_bars {
        chart_title(ui, UI_TEXT.chart_daily_title);
        render_daily_bars(ui, model);
        ui.add_space(10.0);
    }

    if visibility.cumulative || visibility.target_ramp {
        chart_title(ui, UI_TEXT.chart_cumulative_title);
        render_cumulative(ui, model, visibility);
    }
}

fn render_daily_bars(ui: &mut Ui, model: &DashboardModel) {
    let bars: Vec<Bar> = model
        .series
        .iter()
        .enumerate()
        .map(|(i, day)| {
            Bar::new(i as f64, day.daily_liters)
                .width(PLOT_CONFIG.bar_width_pct)
                .fill(PLOT_CONFIG.daily_bar_color)
        })
        .collect();

    let y_max = model
        .series
        .iter()
        .map(|d| d.daily_liters)
        .fold(0.0, f64::max);

    let dates: Vec<NaiveDate> = model.series.iter().map(|d| d.date).collect();
    let day_count = dates.len();

    Plot::new("daily_sales_plot")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(y_max * (1.0 + PLOT_CONFIG.plot_y_padding_pct))
        .custom_x_axes(vec![date_axis(dates)])
        .x_grid_spacer(day_grid_spacer(day_count))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(UI_TEXT.chart_daily_name, bars).color(PLOT_CONFIG.daily_bar_color),
            );
        });
}

fn render_cumulative(ui: &mut Ui, model: &DashboardModel, visibility: &ChartVisibility) {
    let cumulative: Vec<[f64; 2]> = model
        .series
        .iter()
        .enumerate()
        .map(|(i, day)| [i as f64, day.cumulative_liters])
        .collect();
    let target: Vec<[f64; 2]> = model
        .series
        .iter()
        .enumerate()
        .map(|(i, day)| [i as f64, day.cumulative_target])
        .collect();

    let y_max = model
        .series
        .iter()
        .flat_map(|d| [d.cumulative_liters, d.cumulative_target])
        .fold(0.0, f64::max);

    let dates: Vec<NaiveDate> = model.series.iter().map(|d| d.date).collect();
    let day_count = dates.len();

    Plot::new("cumulative_plot")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(y_max * (1.0 + PLOT_CONFIG.plot_y_padding_pct))
        .custom_x_axes(vec![date_axis(dates)])
        .x_grid_spacer(day_grid_spacer(day_count))
        .show(ui, |plot_ui| {
            if visibility.cumulative {
                plot_ui.line(
                    Line::new(
                        UI_TEXT.chart_cumulative_name,
                        PlotPoints::new(cumulative.clone()),
                    )
                    .color(PLOT_CONFIG.cumulative_line_color)
                    .width(PLOT_CONFIG.line_width),
                );
                plot_ui.points(
                    Points::new("", PlotPoints::new(cumulative))
                        .color(PLOT_CONFIG.cumulative_line_color)
                        .radius(PLOT_CONFIG.point_radius),
                );
            }
            if visibility.target_ramp {
                plot_ui.line(
                    Line::new(UI_TEXT.chart_target_name, PlotPoints::new(target))
                        .color(PLOT_CONFIG.target_line_color)
                        .width(PLOT_CONFIG.line_width)
                        .style(LineStyle::Dashed {
                            length: PLOT_CONFIG.target_dash_length,
                        }),
                );
            }
        });
}
