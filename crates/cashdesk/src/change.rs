//! Greedy change breakdown, largest denomination first.

use serde::{Deserialize, Serialize};

use crate::denomination::{COIN_VALUES, NOTE_VALUES};

/// One line of a change breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLine {
    pub value: i64,
    pub count: i64,
    pub total: i64,
}

/// Break an amount into denominations, largest first. Non-positive amounts
/// yield an empty breakdown. The smallest coin is ₹1, so the breakdown is
/// always exact.
pub fn change_breakdown(amount: i64) -> Vec<ChangeLine> {
    let mut remaining = amount.max(0);
    let mut breakdown = Vec::new();

    for &value in NOTE_VALUES.iter().chain(COIN_VALUES.iter()) {
        if remaining >= value {
            let count = remaining / value;
            breakdown.push(ChangeLine {
                value,
                count,
                total: value * count,
            });
            remaining %= value;
        }
    }

    breakdown
}
