// src/config/demo.rs

/// One seeded sale: (days before today, operator, region, liters).
pub type DemoSale = (i64, &'static str, &'static str, f64);

pub struct DemoConfig {
    pub sales: &'static [DemoSale],
}

/// Sample data for `--demo` launches, so the table and both charts have
/// something to show on first open. Dates are resolved relative to today
/// when the session is seeded.
pub const DEMO: DemoConfig = DemoConfig {
    sales: &[
        (4, "Luis", "Norte", 980.0),
        (4, "Marta", "Centro", 450.0),
        (3, "Luis", "Norte", 1210.0),
        (2, "Jorge", "Sur", 760.0),
        (2, "Marta", "Centro", 390.0),
        (1, "Jorge", "Sur", 1480.0),
        (0, "Luis", "Norte", 640.0),
    ],
};
