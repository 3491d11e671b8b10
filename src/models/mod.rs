mod kpi;
mod sale;

pub use kpi::{
    DailyAggregate, DashboardModel, completion_ratio, daily_need, daily_series, daily_target,
    distinct_days_recorded, remaining_days, total_sold,
};
pub use sale::{SaleRecord, SalesLedger};
