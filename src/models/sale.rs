// src/models/sale.rs

use chrono::NaiveDate;

/// One sale as entered through the form. Immutable once stored; there is no
/// id and no update/delete path, the ledger only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub operator: String,
    pub region: String,
    pub liters: f64,
}

/// Append-only, session-scoped ledger of sales.
///
/// Insertion order is preserved exactly; entries are never reordered or
/// deduplicated. The ledger lives only as long as the session (it is skipped
/// by app persistence).
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any well-typed record, including zero liters and duplicate
    /// dates or operators.
    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, liters: f64) -> SaleRecord {
        SaleRecord {
            date: date.parse().unwrap(),
            operator: "Luis".into(),
            region: "Norte".into(),
            liters,
        }
    }

    #[test]
    fn append_preserves_entry_order_regardless_of_dates() {
        let mut ledger = SalesLedger::new();
        ledger.append(record("2024-01-05", 100.0));
        ledger.append(record("2024-01-01", 50.0));

        let dates: Vec<_> = ledger.all().iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2024-01-05", "2024-01-01"]);
    }

    #[test]
    fn zero_liter_sales_are_accepted() {
        let mut ledger = SalesLedger::new();
        ledger.append(record("2024-01-01", 0.0));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.all()[0].liters, 0.0);
    }
}
