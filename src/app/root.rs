use eframe::{
    Frame, Storage,
    egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, Ui},
};
use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    app::Session,
    ui::{
        ChartVisibility, SaleForm, UI_CONFIG, UI_TEXT, render_charts, render_config_panel,
        render_metrics, render_sales_table, setup_custom_visuals,
    },
};

/// How long the "sale recorded" confirmation stays on screen.
const SUCCESS_FLASH_SECS: f64 = 2.5;

/// Root application. Only UI preferences are persisted across runs; the
/// session (ledger + target config) is deliberately volatile.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) chart_visibility: ChartVisibility,
    #[serde(skip)]
    pub(crate) session: Session,
    #[serde(skip)]
    form: SaleForm,
    #[serde(skip)]
    flash_until: Option<f64>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            chart_visibility: ChartVisibility::default(),
            session: Session::new(),
            form: SaleForm::default(),
            flash_until: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if args.demo {
            app.session.seed_demo();
        }

        app
    }

    fn render_sidebar(&mut self, ctx: &Context, ui: &mut Ui) {
        render_config_panel(ui, &mut self.session.config);
        self.session.config.clamp_bounds();

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        // One interaction step: apply the submitted sale, arm the
        // confirmation flash. Everything downstream is recomputed from the
        // ledger this same frame.
        if let Some(record) = self.form.render(ui) {
            self.session.submit_sale(record);
            self.flash_until = Some(ctx.input(|i| i.time) + SUCCESS_FLASH_SECS);
        }
        self.render_flash(ctx, ui);
    }

    fn render_flash(&mut self, ctx: &Context, ui: &mut Ui) {
        let Some(until) = self.flash_until else {
            return;
        };
        if ctx.input(|i| i.time) < until {
            ui.add_space(8.0);
            ui.label(RichText::new(UI_TEXT.form_success).color(UI_CONFIG.colors.success));
            // Keep repainting so the flash clears itself without user input.
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        } else {
            self.flash_until = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        SidePanel::left("config_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(280.0)
            .show(ctx, |ui| self.render_sidebar(ctx, ui));

        // Pure recomputation from the full ledger, every frame.
        let model = self.session.dashboard();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(4.0);
                        ui.heading(RichText::new(UI_TEXT.app_title).size(22.0));
                        ui.add_space(10.0);

                        render_sales_table(ui, self.session.ledger.all());
                        ui.add_space(14.0);
                        render_metrics(ui, &model);
                        ui.add_space(14.0);
                        render_charts(ui, &model, &mut self.chart_visibility);
                    });
            });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        // Only chart visibility toggles survive; the ledger never does.
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
