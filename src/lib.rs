#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod models;
pub mod ui;

pub use app::{App, Session};
pub use config::TargetConfig;
pub use models::{DashboardModel, SaleRecord, SalesLedger};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the session with a few sample sales so the dashboard is not
    /// empty on first launch
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
