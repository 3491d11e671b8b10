// src/models/kpi.rs
//
// Pure KPI aggregation over the session ledger. Nothing in here mutates
// state or caches results: the dashboard recomputes everything from the full
// ledger on every frame, which is cheap at this scale.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::TargetConfig;
use crate::models::sale::SalesLedger;

/// One distinct recorded day, with its cumulative position on the two curves.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    /// Sum of liters sold on this date.
    pub daily_liters: f64,
    /// Running sum of daily_liters, ascending by date.
    pub cumulative_liters: f64,
    /// Idealized cumulative target: (position + 1) * daily_target.
    /// Indexed by position in the recorded-day sequence, not by elapsed
    /// calendar days - a day with no sales simply does not appear.
    pub cumulative_target: f64,
}

/// Everything the dashboard renders, computed in one pass.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub monthly_target: f64,
    pub total_sold: f64,
    /// None when monthly_target is 0 (the ratio is undefined; the UI shows a
    /// dash instead of propagating a division).
    pub completion_ratio: Option<f64>,
    pub daily_target: f64,
    pub daily_need: f64,
    pub days_recorded: usize,
    pub remaining_days: u32,
    pub series: Vec<DailyAggregate>,
}

impl DashboardModel {
    pub fn compute(config: &TargetConfig, ledger: &SalesLedger) -> Self {
        Self {
            monthly_target: config.monthly_target,
            total_sold: total_sold(ledger),
            completion_ratio: completion_ratio(config, ledger),
            daily_target: daily_target(config),
            daily_need: daily_need(config, ledger),
            days_recorded: distinct_days_recorded(ledger),
            remaining_days: remaining_days(config, ledger),
            series: daily_series(config, ledger),
        }
    }
}

/// Liters that must be sold per business day to hit the monthly target.
/// business_days >= 1 is guaranteed by the config boundary clamp.
pub fn daily_target(config: &TargetConfig) -> f64 {
    config.monthly_target / f64::from(config.business_days)
}

pub fn total_sold(ledger: &SalesLedger) -> f64 {
    ledger.all().iter().map(|r| r.liters).sum()
}

pub fn distinct_days_recorded(ledger: &SalesLedger) -> usize {
    let dates: std::collections::BTreeSet<NaiveDate> =
        ledger.all().iter().map(|r| r.date).collect();
    dates.len()
}

/// Business days left in the month. Floors at 1 so daily_need never divides
/// by zero (or a negative count) once recorded days exceed business days.
pub fn remaining_days(config: &TargetConfig, ledger: &SalesLedger) -> u32 {
    let recorded = distinct_days_recorded(ledger) as i64;
    (i64::from(config.business_days) - recorded).max(1) as u32
}

/// Liters per remaining day needed to close the gap. Negative once the
/// target is already exceeded; deliberately not clamped.
pub fn daily_need(config: &TargetConfig, ledger: &SalesLedger) -> f64 {
    (config.monthly_target - total_sold(ledger)) / f64::from(remaining_days(config, ledger))
}

/// Fraction of the monthly target sold so far. Undefined (None) when the
/// target is 0.
pub fn completion_ratio(config: &TargetConfig, ledger: &SalesLedger) -> Option<f64> {
    (config.monthly_target > 0.0).then(|| total_sold(ledger) / config.monthly_target)
}

/// Groups the ledger by date (ascending) and threads the running sum and the
/// idealized target ramp through the sequence.
pub fn daily_series(config: &TargetConfig, ledger: &SalesLedger) -> Vec<DailyAggregate> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for sale in ledger.all() {
        *by_date.entry(sale.date).or_insert(0.0) += sale.liters;
    }

    let target_step = daily_target(config);
    let mut cumulative = 0.0;

    by_date
        .into_iter()
        .enumerate()
        .map(|(i, (date, daily_liters))| {
            cumulative += daily_liters;
            DailyAggregate {
                date,
                daily_liters,
                cumulative_liters: cumulative,
                cumulative_target: (i + 1) as f64 * target_step,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sale::SaleRecord;

    fn sale(date: &str, liters: f64) -> SaleRecord {
        SaleRecord {
            date: date.parse().unwrap(),
            operator: String::new(),
            region: String::new(),
            liters,
        }
    }

    fn ledger_of(sales: &[(&str, f64)]) -> SalesLedger {
        let mut ledger = SalesLedger::new();
        for &(date, liters) in sales {
            ledger.append(sale(date, liters));
        }
        ledger
    }

    fn config(monthly_target: f64, business_days: u32) -> TargetConfig {
        TargetConfig {
            monthly_target,
            business_days,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_ledger_yields_degenerate_metrics() {
        let ledger = SalesLedger::new();
        let cfg = config(30_000.0, 25);

        assert_eq!(total_sold(&ledger), 0.0);
        assert_eq!(distinct_days_recorded(&ledger), 0);
        assert_eq!(remaining_days(&cfg, &ledger), 25);
        assert_eq!(completion_ratio(&cfg, &ledger), Some(0.0));
        assert!(daily_series(&cfg, &ledger).is_empty());
    }

    #[test]
    fn single_sale_scenario() {
        // One sale of 100 against a 3000 target over 30 days.
        let ledger = ledger_of(&[("2024-01-01", 100.0)]);
        let cfg = config(3000.0, 30);

        assert_eq!(total_sold(&ledger), 100.0);
        assert!(approx(daily_target(&cfg), 100.0));
        assert_eq!(distinct_days_recorded(&ledger), 1);
        assert_eq!(remaining_days(&cfg, &ledger), 29);
        assert!(approx(daily_need(&cfg, &ledger), 2900.0 / 29.0));
        assert!(approx(completion_ratio(&cfg, &ledger).unwrap(), 100.0 / 3000.0));
    }

    #[test]
    fn daily_series_groups_and_accumulates() {
        // Two sales on day one, one on day two.
        let ledger = ledger_of(&[
            ("2024-01-01", 500.0),
            ("2024-01-01", 300.0),
            ("2024-01-02", 200.0),
        ]);
        let cfg = config(30_000.0, 25); // daily target 1200

        let series = daily_series(&cfg, &ledger);
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].daily_liters, 800.0);
        assert_eq!(series[0].cumulative_liters, 800.0);
        assert!(approx(series[0].cumulative_target, 1200.0));

        assert_eq!(series[1].daily_liters, 200.0);
        assert_eq!(series[1].cumulative_liters, 1000.0);
        assert!(approx(series[1].cumulative_target, 2400.0));
    }

    #[test]
    fn cumulative_liters_is_monotone_and_ends_at_total() {
        let ledger = ledger_of(&[
            ("2024-01-03", 120.0),
            ("2024-01-01", 0.0),
            ("2024-01-02", 45.5),
            ("2024-01-03", 80.0),
            ("2024-01-05", 10.0),
        ]);
        let cfg = config(30_000.0, 25);

        let series = daily_series(&cfg, &ledger);
        for pair in series.windows(2) {
            assert!(pair[1].cumulative_liters >= pair[0].cumulative_liters);
            assert!(pair[1].date > pair[0].date);
        }
        let last = series.last().unwrap();
        assert!(approx(last.cumulative_liters, total_sold(&ledger)));
    }

    #[test]
    fn daily_series_is_pure() {
        let ledger = ledger_of(&[("2024-01-01", 500.0), ("2024-01-02", 200.0)]);
        let cfg = config(30_000.0, 25);

        assert_eq!(daily_series(&cfg, &ledger), daily_series(&cfg, &ledger));
    }

    #[test]
    fn zero_monthly_target_yields_undefined_ratio() {
        let ledger = ledger_of(&[("2024-01-01", 500.0)]);
        let cfg = config(0.0, 25);

        assert_eq!(completion_ratio(&cfg, &ledger), None);
        // The rest of the metrics stay well-defined.
        assert!(approx(daily_target(&cfg), 0.0));
        assert!(daily_need(&cfg, &ledger) < 0.0);
    }

    #[test]
    fn remaining_days_floors_at_one() {
        // 26 distinct recorded days against 25 business days.
        let mut ledger = SalesLedger::new();
        for day in 1..=26 {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            ledger.append(SaleRecord {
                date,
                operator: String::new(),
                region: String::new(),
                liters: 100.0,
            });
        }
        let cfg = config(30_000.0, 25);

        assert_eq!(distinct_days_recorded(&ledger), 26);
        assert_eq!(remaining_days(&cfg, &ledger), 1);
        // Shortfall lands on the single remaining day.
        assert!(approx(daily_need(&cfg, &ledger), 30_000.0 - 2600.0));
    }

    #[test]
    fn daily_need_goes_negative_once_target_is_beaten() {
        let ledger = ledger_of(&[("2024-01-01", 40_000.0)]);
        let cfg = config(30_000.0, 25);

        assert!(approx(daily_need(&cfg, &ledger), -10_000.0 / 24.0));
        assert!(completion_ratio(&cfg, &ledger).unwrap() > 1.0);
    }

    #[test]
    fn dashboard_model_mirrors_the_individual_metrics() {
        let ledger = ledger_of(&[("2024-01-01", 800.0), ("2024-01-02", 200.0)]);
        let cfg = config(30_000.0, 25);

        let model = DashboardModel::compute(&cfg, &ledger);
        assert_eq!(model.total_sold, 1000.0);
        assert_eq!(model.days_recorded, 2);
        assert_eq!(model.remaining_days, 23);
        assert_eq!(model.series.len(), 2);
        assert!(approx(model.daily_target, 1200.0));
        assert!(approx(model.completion_ratio.unwrap(), 1000.0 / 30_000.0));
    }
}
