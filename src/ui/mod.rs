mod ui_config;
mod ui_metrics;
mod ui_panels;
mod ui_plot_view;
mod ui_table;
mod ui_text;
mod utils;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_metrics::render_metrics;
pub(crate) use ui_panels::{SaleForm, render_config_panel};
pub(crate) use ui_plot_view::{ChartVisibility, render_charts};
pub(crate) use ui_table::render_sales_table;
pub(crate) use ui_text::UI_TEXT;
pub(crate) use utils::setup_custom_visuals;
