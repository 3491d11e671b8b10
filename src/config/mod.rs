//! Configuration module for the sales dashboard.

mod demo;
mod types;

// Can't be private because we don't re-export the struct's fields wholesale
pub mod plot;

pub use demo::{DEMO, DemoSale};
pub use types::{
    DEFAULT_BUSINESS_DAYS, DEFAULT_MONTHLY_TARGET, MAX_BUSINESS_DAYS, MIN_BUSINESS_DAYS,
    TargetConfig,
};
