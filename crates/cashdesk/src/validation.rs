//! Advisory sanity checks over a raw denomination count.
//!
//! Warnings never block anything: callers decide whether to surface them or
//! carry on. Session payloads arrive from clients, so counts here may be
//! negative even though the ledger itself clamps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Thresholds for the "unusually high count" warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Notes at or above this face value get the high-count check.
    pub high_value_floor: i64,
    /// Counts above this many units trigger the warning.
    pub high_value_count: i64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            high_value_floor: 500,
            high_value_count: 50,
        }
    }
}

/// Outcome of a cash-count check: a validity flag plus human-readable
/// warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashCountReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

/// Check a denomination map with the default limits.
pub fn validate_cash_count(denominations: &BTreeMap<i64, i64>) -> CashCountReport {
    validate_cash_count_with(denominations, ValidationLimits::default())
}

/// Check a denomination map against explicit limits.
pub fn validate_cash_count_with(
    denominations: &BTreeMap<i64, i64>,
    limits: ValidationLimits,
) -> CashCountReport {
    let mut warnings = Vec::new();

    for (&value, &count) in denominations {
        if count < 0 {
            warnings.push(format!("₹{value} denomination cannot be negative"));
        }
    }

    for (&value, &count) in denominations {
        if value >= limits.high_value_floor && count > limits.high_value_count {
            warnings.push(format!("Unusually high count for ₹{value} notes: {count}"));
        }
    }

    CashCountReport {
        is_valid: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(i64, i64)]) -> BTreeMap<i64, i64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn clean_count_is_valid() {
        let report = validate_cash_count(&counts(&[(2000, 2), (500, 10), (10, 40)]));
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn negative_count_is_flagged_not_fatal() {
        let report = validate_cash_count(&counts(&[(100, -3)]));
        assert!(!report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("cannot be negative"));
    }

    #[test]
    fn high_value_note_count_is_flagged() {
        let report = validate_cash_count(&counts(&[(500, 51), (2000, 51), (100, 200)]));
        assert!(!report.is_valid);
        // 100-rupee notes are below the floor; only 500 and 2000 warn.
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn limits_are_configurable() {
        let limits = ValidationLimits {
            high_value_floor: 100,
            high_value_count: 10,
        };
        let report = validate_cash_count_with(&counts(&[(100, 11)]), limits);
        assert!(!report.is_valid);
    }
}
