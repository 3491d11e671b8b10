// src/app/session.rs

use chrono::{Days, Local};

use crate::config::{DEMO, TargetConfig};
use crate::models::{DashboardModel, SaleRecord, SalesLedger};

/// All state owned by one running session: the append-only ledger plus the
/// target configuration. Volatile by design - nothing here survives a
/// restart.
#[derive(Debug, Default)]
pub struct Session {
    pub ledger: SalesLedger,
    pub config: TargetConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The one write path: apply a form submission to the ledger.
    pub fn submit_sale(&mut self, record: SaleRecord) {
        log::info!(
            "sale recorded: {} {} Lts ({} / {})",
            record.date,
            record.liters,
            record.operator,
            record.region
        );
        self.ledger.append(record);
    }

    /// Full recomputation from the complete ledger; called once per frame.
    pub fn dashboard(&self) -> DashboardModel {
        DashboardModel::compute(&self.config, &self.ledger)
    }

    /// Seed sample sales for `--demo` launches.
    pub fn seed_demo(&mut self) {
        let today = Local::now().date_naive();
        for &(days_ago, operator, region, liters) in DEMO.sales {
            let date = today
                .checked_sub_days(Days::new(days_ago as u64))
                .unwrap_or(today);
            self.ledger.append(SaleRecord {
                date,
                operator: operator.to_owned(),
                region: region.to_owned(),
                liters,
            });
        }
        log::info!("demo session seeded with {} sales", self.ledger.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_read_round_trip() {
        let mut session = Session::new();
        session.submit_sale(SaleRecord {
            date: "2024-01-01".parse().unwrap(),
            operator: "Luis".into(),
            region: "Norte".into(),
            liters: 100.0,
        });

        let model = session.dashboard();
        assert_eq!(model.total_sold, 100.0);
        assert_eq!(model.days_recorded, 1);
    }

    #[test]
    fn demo_seed_populates_the_ledger() {
        let mut session = Session::new();
        session.seed_demo();
        assert_eq!(session.ledger.len(), DEMO.sales.len());
    }
}
