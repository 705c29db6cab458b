//! Canned demonstration session, used by the read-only HTTP endpoint and as
//! a golden fixture in tests.

use crate::session::{CashSessionLedger, SessionSummary};

/// A populated session: ₹5000 opening float, ₹2300 cash / ₹1800 UPI sales,
/// and a fixed drawer count (₹8150 total, ₹850 surplus).
pub fn demo_session() -> SessionSummary {
    let mut ledger = CashSessionLedger::initialize(Some(5000));
    ledger.record_sales(Some(2300), Some(1800));

    for (value, count) in [
        (2000, 2),
        (500, 4),
        (200, 3),
        (100, 8),
        (50, 6),
        (20, 10),
        (10, 15),
        (5, 20),
    ] {
        // Fixed table values only, cannot fail.
        let _ = ledger.set_denomination_count(value, count);
    }

    ledger.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ReconciliationStatus;

    #[test]
    fn demo_session_golden_figures() {
        let summary = demo_session();
        let s = &summary.session;

        assert_eq!(s.opening_cash, 5000);
        assert_eq!(s.total_sales, 4100);
        assert_eq!(s.total_counted, 8150);
        assert_eq!(s.expected_cash, 7300);
        assert_eq!(s.difference, 850);
        assert_eq!(
            summary.reconciliation.status,
            ReconciliationStatus::SignificantDiscrepancy
        );
        assert_eq!(summary.sales_breakdown.cash.percentage, 56.1);
        assert_eq!(summary.sales_breakdown.upi.percentage, 43.9);
    }
}
