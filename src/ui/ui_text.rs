// src/ui/ui_text.rs
//
// Every user-facing string in one place. The dashboard keeps the original
// Spanish wording of the sales-control sheet it replaces.

pub struct UiText {
    pub app_title: &'static str,

    // Sidebar: configuration
    pub config_heading: &'static str,
    pub monthly_target_label: &'static str,
    pub business_days_label: &'static str,
    pub liters_suffix: &'static str,

    // Sidebar: entry form
    pub form_heading: &'static str,
    pub form_date: &'static str,
    pub form_operator: &'static str,
    pub form_region: &'static str,
    pub form_liters: &'static str,
    pub form_submit: &'static str,
    pub form_success: &'static str,

    // Record table
    pub table_heading: &'static str,
    pub table_header_date: &'static str,
    pub table_header_operator: &'static str,
    pub table_header_region: &'static str,
    pub table_header_liters: &'static str,
    pub table_empty: &'static str,

    // Metrics
    pub metric_monthly_target: &'static str,
    pub metric_total_sold: &'static str,
    pub metric_completion: &'static str,
    pub metric_daily_target: &'static str,
    pub metric_daily_need: &'static str,
    pub metric_remaining_days: &'static str,
    pub metric_undefined: &'static str,

    // Charts
    pub charts_heading: &'static str,
    pub chart_daily_title: &'static str,
    pub chart_cumulative_title: &'static str,
    pub chart_daily_name: &'static str,
    pub chart_cumulative_name: &'static str,
    pub chart_target_name: &'static str,
    pub toggle_daily_bars: &'static str,
    pub toggle_cumulative: &'static str,
    pub toggle_target_ramp: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "📊 Control de Ventas de Gas LP",

    config_heading: "⚙ Configuración",
    monthly_target_label: "Meta mensual (Lts)",
    business_days_label: "Días hábiles del mes",
    liters_suffix: " Lts",

    form_heading: "➕ Registrar nueva venta",
    form_date: "Fecha",
    form_operator: "Operador",
    form_region: "Región",
    form_liters: "Litros vendidos",
    form_submit: "Guardar",
    form_success: "✅ Venta registrada correctamente",

    table_heading: "📋 Ventas registradas",
    table_header_date: "Fecha",
    table_header_operator: "Operador",
    table_header_region: "Región",
    table_header_liters: "Litros",
    table_empty: "Sin ventas registradas todavía",

    metric_monthly_target: "Meta mensual",
    metric_total_sold: "Venta acumulada",
    metric_completion: "% Cumplimiento",
    metric_daily_target: "Meta diaria",
    metric_daily_need: "Necesidad diaria restante",
    metric_remaining_days: "Días hábiles restantes",
    metric_undefined: "—",

    charts_heading: "📈 Avance de Ventas vs Meta",
    chart_daily_title: "Ventas diarias",
    chart_cumulative_title: "Acumulado vs Meta",
    chart_daily_name: "Litros",
    chart_cumulative_name: "Acumulado",
    chart_target_name: "Meta acumulada",
    toggle_daily_bars: "Barras diarias",
    toggle_cumulative: "Acumulado",
    toggle_target_ramp: "Meta",
};
